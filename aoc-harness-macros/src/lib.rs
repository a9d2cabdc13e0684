//! Procedural macros for the `aoc-harness` crate.

use proc_macro::TokenStream;
use quote::quote;
use syn::{Error, Expr, Item, ItemImpl, ItemStruct, LitInt, Type, parse_macro_input};

/// Attribute that registers a `Puzzle` implementation with the day registry.
///
/// Applied to the struct implementing `Puzzle` (or to one of its impl
/// blocks), it emits an `inventory::submit!` of a `PuzzleEntry` whose run
/// function parses the input and executes both parts through the harness
/// runner.
///
/// # Properties
///
/// - `day` (required): integer literal, the day this solution answers.
/// - `title` (required): an expression evaluating to `&'static str`, the
///   display title shown when the solution runs.
///
/// # Errors
///
/// Produces a compile error when applied to anything other than a struct or
/// impl block, when a required property is missing, or when a property is
/// repeated.
///
/// # Example
///
/// ```ignore
/// #[register_puzzle(day = 9, title = "Day 9: Mirage Maintenance")]
/// struct Day09;
///
/// impl Puzzle for Day09 { /* ... */ }
/// ```
#[proc_macro_attribute]
pub fn register_puzzle(args: TokenStream, input: TokenStream) -> TokenStream {
    let mut day_lit_opt: Option<LitInt> = None;
    let mut title_expr_opt: Option<Expr> = None;

    let property_parser = syn::meta::parser(|meta| {
        if meta.path.is_ident("day") {
            if day_lit_opt.is_some() {
                return Err(meta.error("duplicate 'day' property"));
            }
            day_lit_opt = Some(meta.value()?.parse()?);
            Ok(())
        } else if meta.path.is_ident("title") {
            if title_expr_opt.is_some() {
                return Err(meta.error("duplicate 'title' property"));
            }
            title_expr_opt = Some(meta.value()?.parse()?);
            Ok(())
        } else {
            Err(meta.error("unsupported register_puzzle property"))
        }
    });
    parse_macro_input!(args with property_parser);

    let Some(day_lit) = day_lit_opt else {
        return Error::new(
            proc_macro2::Span::call_site(),
            "missing required property: 'day'",
        )
        .to_compile_error()
        .into();
    };
    let Some(title_expr) = title_expr_opt else {
        return Error::new(
            proc_macro2::Span::call_site(),
            "missing required property: 'title'",
        )
        .to_compile_error()
        .into();
    };

    // clone before parsing consumes the stream; the annotated item passes
    // through unchanged
    let original_input = input.clone();
    let item = parse_macro_input!(input as Item);

    let puzzle_ty = match item {
        Item::Struct(ItemStruct { ident, .. }) => quote! { #ident },
        Item::Impl(ItemImpl { self_ty, .. }) => {
            let ty: Type = *self_ty;
            quote! { #ty }
        }
        _ => {
            return Error::new(
                proc_macro2::Span::call_site(),
                "#[register_puzzle] can only be applied to a struct or an impl block",
            )
            .to_compile_error()
            .into();
        }
    };

    let submission = quote! {
        inventory::submit! {
            aoc_harness::registry::PuzzleEntry::new(
                #day_lit,
                #title_expr,
                |input, report, timed| {
                    aoc_harness::runner::run_puzzle::<#puzzle_ty>(
                        #title_expr,
                        input,
                        report,
                        timed,
                    )
                },
            )
        }
    };

    let input_ts = proc_macro2::TokenStream::from(original_input);
    TokenStream::from(quote! {
        #input_ts
        #submission
    })
}
