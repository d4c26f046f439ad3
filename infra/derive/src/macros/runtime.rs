use proc_macro2::TokenStream;
use quote::quote;
use syn::{Error, Ident, ItemFn, ReturnType, Type};

/// Expands the `#[moodflag_runtime::main]` attribute macro.
#[must_use]
pub fn expand_main(args: TokenStream, input: ItemFn) -> TokenStream {
    if input.sig.asyncness.is_none() {
        return Error::new_spanned(
            &input.sig.ident,
            "The #[moodflag_runtime::main] attribute can only be used on async functions",
        )
        .to_compile_error();
    }

    if !returns_result(&input.sig.output) {
        return Error::new_spanned(
            &input.sig.output,
            "The #[moodflag_runtime::main] attribute requires a Result return type",
        )
        .to_compile_error();
    }

    let preset = match preset_call(args) {
        Ok(preset) => preset,
        Err(err) => return err.to_compile_error(),
    };

    let ItemFn { attrs, vis, sig, block } = input;
    let name = &sig.ident;
    let output = &sig.output;

    quote! {
        #(#attrs)*
        #vis fn #name() #output {
            let config = #preset;
            let rt = ::moodflag_runtime::build_runtime(&config)?;
            rt.block_on(async #block)
        }
    }
}

fn preset_call(args: TokenStream) -> syn::Result<TokenStream> {
    if args.is_empty() {
        return Ok(quote! { ::moodflag_runtime::RuntimeConfig::default() });
    }

    let ident: Ident = syn::parse2(args)?;
    match ident.to_string().as_str() {
        "interactive" => Ok(quote! { ::moodflag_runtime::RuntimeConfig::interactive() }),
        "service" => Ok(quote! { ::moodflag_runtime::RuntimeConfig::service() }),
        "default" => Ok(quote! { ::moodflag_runtime::RuntimeConfig::default() }),
        _ => Err(Error::new_spanned(
            ident,
            "Unknown runtime profile. Use: interactive, service, or default",
        )),
    }
}

fn returns_result(output: &ReturnType) -> bool {
    let ReturnType::Type(_, ty) = output else {
        return false;
    };
    let Type::Path(path) = &**ty else {
        return false;
    };
    path.path.segments.last().is_some_and(|seg| seg.ident == "Result")
}
