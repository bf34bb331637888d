extern crate proc_macro;

use case::CaseExt;
use proc_macro::TokenStream;
use proc_macro2::{Ident, Span};
use proc_macro_crate::{crate_name, FoundCrate};
use quote::{format_ident, quote, quote_spanned};
use syn::spanned::Spanned;
use syn::{parse_macro_input, Data, DataStruct, DeriveInput, Fields, FieldsNamed};

/// Derives `Model<E>` for a struct whose first field is `ctx: Ctx` and every
/// other field implements `UpdateWithCtx<E>`.
///
/// A `{Name}Field` enum is generated alongside, one variant per field, and is
/// used to report which parts of the model changed.
#[proc_macro_derive(Model)]
pub fn model_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let core_ident = get_core_ident();
    let name = &input.ident;

    let named = match input.data {
        Data::Struct(DataStruct {
            fields: Fields::Named(FieldsNamed { named, .. }),
            ..
        }) => named,
        _ => panic!("#[derive(Model)] is only defined for structs with named fields"),
    };

    let mut fields = named.iter();
    match fields.next().and_then(|field| field.ident.as_ref()) {
        Some(ident) if ident == "ctx" => {}
        _ => panic!("#[derive(Model)] requires the first field to be named `ctx`"),
    };
    let fields = fields.collect::<Vec<_>>();

    let field_enum_ident = format_ident!("{}Field", name);
    let field_idents = fields
        .iter()
        .filter_map(|field| field.ident.as_ref())
        .collect::<Vec<_>>();
    let field_variants = field_idents
        .iter()
        .map(|ident| Ident::new(&ident.to_string().to_camel(), ident.span()))
        .collect::<Vec<_>>();
    let effects_idents = field_idents
        .iter()
        .map(|ident| format_ident!("{}_effects", ident))
        .collect::<Vec<_>>();

    let fields_updates = fields.iter().zip(effects_idents.iter()).map(|(field, effects_ident)| {
        let ident = &field.ident;
        quote_spanned! {field.span() =>
            let #effects_ident = #core_ident::runtime::UpdateWithCtx::<E>::update(
                &mut self.#ident,
                msg,
                &self.ctx,
            );
        }
    });

    let field_updates = fields
        .iter()
        .zip(field_variants.iter())
        .map(|(field, variant)| {
            let ident = &field.ident;
            quote_spanned! {field.span() =>
                #field_enum_ident::#variant => {
                    let effects = #core_ident::runtime::UpdateWithCtx::<E>::update(
                        &mut self.#ident,
                        msg,
                        &self.ctx,
                    );
                    let fields = if effects.has_changed {
                        vec![#field_enum_ident::#variant]
                    } else {
                        vec![]
                    };
                    (effects.into_iter().collect(), fields)
                }
            }
        });

    let expanded = quote! {
        #[derive(Clone, Copy, PartialEq, Eq, Debug, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum #field_enum_ident {
            Ctx,
            #(#field_variants),*
        }

        impl<E: #core_ident::runtime::Env + 'static> #core_ident::runtime::Model<E> for #name {
            type Field = #field_enum_ident;

            fn update(
                &mut self,
                msg: &#core_ident::runtime::msg::Msg,
            ) -> (Vec<#core_ident::runtime::Effect>, Vec<Self::Field>) {
                let ctx_effects = #core_ident::runtime::Update::<E>::update(&mut self.ctx, msg);
                #(#fields_updates)*
                let fields = vec![
                    (ctx_effects.has_changed, #field_enum_ident::Ctx),
                    #((#effects_idents.has_changed, #field_enum_ident::#field_variants)),*
                ]
                .into_iter()
                .filter_map(|(has_changed, field)| if has_changed { Some(field) } else { None })
                .collect::<Vec<_>>();
                let effects = ctx_effects
                    .into_iter()
                    #(.chain(#effects_idents.into_iter()))*
                    .collect::<Vec<_>>();
                (effects, fields)
            }

            fn update_field(
                &mut self,
                msg: &#core_ident::runtime::msg::Msg,
                field: &Self::Field,
            ) -> (Vec<#core_ident::runtime::Effect>, Vec<Self::Field>) {
                match field {
                    #field_enum_ident::Ctx => {
                        let effects = #core_ident::runtime::Update::<E>::update(&mut self.ctx, msg);
                        let fields = if effects.has_changed {
                            vec![#field_enum_ident::Ctx]
                        } else {
                            vec![]
                        };
                        (effects.into_iter().collect(), fields)
                    }
                    #(#field_updates)*
                }
            }
        }
    };

    TokenStream::from(expanded)
}

fn get_core_ident() -> proc_macro2::TokenStream {
    match crate_name("wat-core") {
        Ok(FoundCrate::Itself) => quote! { crate },
        Ok(FoundCrate::Name(name)) => {
            let ident = Ident::new(&name, Span::call_site());
            quote! { ::#ident }
        }
        Err(error) => panic!("wat-core is not found in the dependencies: {}", error),
    }
}
