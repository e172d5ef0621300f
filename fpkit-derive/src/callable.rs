//! Implementation of the `callable!` procedural macro.
//!
//! # Supported Input Forms
//!
//! 1. Closure form: `callable!(|a, b| body)`
//! 2. Function path + arity form: `callable!(function_name, 2)`
//!
//! # Generated Code Structure
//!
//! For a closure `|a, b| body`, the macro generates:
//!
//! ```text
//! {
//!     let __fpkit_function = |a: ::fpkit::Value, b: ::fpkit::Value| body;
//!     ::fpkit::Callable::new(2usize, move |__fpkit_arguments: &[::fpkit::Value]| {
//!         ::fpkit::IntoOutcome::into_outcome(__fpkit_function(
//!             ::fpkit::Value::argument(__fpkit_arguments, 0usize),
//!             ::fpkit::Value::argument(__fpkit_arguments, 1usize),
//!         ))
//!     })
//! }
//! ```

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::punctuated::Punctuated;
use syn::{Expr, ExprClosure, ExprLit, ExprPath, Lit, Pat, PatType, Token, parse_quote, spanned::Spanned};

enum CallableInput {
    Closure(ExprClosure),
    FunctionWithArity { function: ExprPath, arity: usize },
}

pub fn callable_impl(input: TokenStream) -> TokenStream {
    let expanded = match parse_callable_input(input) {
        Ok(CallableInput::Closure(closure)) => generate_from_closure(closure),
        Ok(CallableInput::FunctionWithArity { function, arity }) => {
            generate_callable(arity, &quote! { #function })
        }
        Err(error) => error.to_compile_error(),
    };

    TokenStream::from(expanded)
}

fn parse_callable_input(input: TokenStream) -> syn::Result<CallableInput> {
    let input_tokens: proc_macro2::TokenStream = input.into();
    let parser = Punctuated::<Expr, Token![,]>::parse_terminated;
    let expressions: Punctuated<Expr, Token![,]> =
        syn::parse::Parser::parse2(parser, input_tokens)?;

    let mut iterator = expressions.into_iter();
    match (iterator.next(), iterator.next(), iterator.next()) {
        (Some(expression), None, None) => parse_single_expression(expression),
        (Some(first), Some(second), None) => parse_function_with_arity(first, second),
        _ => Err(syn::Error::new(
            proc_macro2::Span::call_site(),
            "callable! requires a closure or function name with arity",
        )),
    }
}

fn parse_single_expression(expression: Expr) -> syn::Result<CallableInput> {
    match expression {
        Expr::Closure(closure) => Ok(CallableInput::Closure(closure)),
        Expr::Path(path) => Err(syn::Error::new(
            path.span(),
            "callable! with function name requires arity: callable!(function_name, 2)",
        )),
        other => Err(syn::Error::new(
            other.span(),
            "callable! requires a closure or function name with arity",
        )),
    }
}

fn parse_function_with_arity(first: Expr, second: Expr) -> syn::Result<CallableInput> {
    let function = match first {
        Expr::Path(path) => path,
        other => {
            return Err(syn::Error::new(
                other.span(),
                "expected a function name or path",
            ));
        }
    };

    let arity = match second {
        Expr::Lit(ExprLit {
            lit: Lit::Int(literal_integer),
            ..
        }) => literal_integer.base10_parse::<usize>()?,
        other => {
            return Err(syn::Error::new(
                other.span(),
                "callable! expected an integer literal for arity",
            ));
        }
    };

    Ok(CallableInput::FunctionWithArity { function, arity })
}

fn generate_from_closure(mut closure: ExprClosure) -> TokenStream2 {
    let arity = closure.inputs.len();
    annotate_parameters(&mut closure);
    generate_callable(arity, &quote! { #closure })
}

fn annotate_parameters(closure: &mut ExprClosure) {
    for input in &mut closure.inputs {
        if !matches!(input, Pat::Type(_)) {
            let pattern = input.clone();
            *input = Pat::Type(PatType {
                attrs: Vec::new(),
                pat: Box::new(pattern),
                colon_token: <Token![:]>::default(),
                ty: Box::new(parse_quote! { ::fpkit::Value }),
            });
        }
    }
}

fn generate_callable(arity: usize, function_expression: &TokenStream2) -> TokenStream2 {
    let arguments: Vec<_> = (0..arity)
        .map(|index| {
            quote! { ::fpkit::Value::argument(__fpkit_arguments, #index) }
        })
        .collect();

    quote! {
        {
            let __fpkit_function = #function_expression;
            ::fpkit::Callable::new(
                #arity,
                move |__fpkit_arguments: &[::fpkit::Value]| {
                    ::fpkit::IntoOutcome::into_outcome(__fpkit_function(#(#arguments),*))
                },
            )
        }
    }
}
