use proc_macro::TokenStream as TokenStream1;
use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, ToTokens};
use syn::{self, Ident};

/// This macro is added before a method of `Round` in the impl block.
/// Use this macro to first check if the current round phase is exactly the
/// phase in the attribute.
///
/// For example, `#[allowed_phase(PlayerTurn)]` will make a method first check
/// if the current phase is `RoundPhase::PlayerTurn`. If not, the method
/// returns `Error::WrongPhase` naming the method, the expected phase and the
/// actual one. Both `Error` and `RoundPhase` must be in scope where the
/// method is defined, and the method must return `Result<_, Error>`.
#[proc_macro_attribute]
pub fn allowed_phase(attr: TokenStream1, item: TokenStream1) -> TokenStream1 {
    let mut ast: syn::ImplItemFn = syn::parse(item).unwrap();
    let phase: Ident = syn::parse(attr).expect("allowed_phase takes a single phase name");
    let operation = ast.sig.ident.to_string();

    let early_return: syn::Stmt = syn::parse2(phase_guard(&phase, &operation)).unwrap();
    ast.block.stmts.insert(0, early_return);
    ast.into_token_stream().into()
}

fn phase_guard(phase: &Ident, operation: &str) -> TokenStream2 {
    quote! {
        if self.phase != RoundPhase::#phase {
            return Err(Error::WrongPhase {
                operation: #operation,
                expected: RoundPhase::#phase,
                actual: self.phase,
            });
        }
    }
}
