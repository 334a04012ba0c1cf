use proc_macro::TokenStream;
use quote::quote;
use syn::{Fields, ItemStruct, parse_macro_input, punctuated::Punctuated};

/// Prepends an auto-increment `i32` primary key `id` and a `created_at`
/// timestamp to a sea-orm model, and wires the model into
/// `crate::db::dao::base_traits`.
///
/// Must be placed above `#[sea_orm::model]` so the injected columns are seen
/// by the entity derive. Takes no arguments.
#[proc_macro_attribute]
pub fn base_entity(attr: TokenStream, item: TokenStream) -> TokenStream {
    let attr = proc_macro2::TokenStream::from(attr);
    if !attr.is_empty() {
        return syn::Error::new_spanned(attr, "base_entity takes no arguments")
            .to_compile_error()
            .into();
    }

    let mut input = parse_macro_input!(item as ItemStruct);
    let Fields::Named(fields) = &mut input.fields else {
        return syn::Error::new_spanned(input, "base_entity requires a struct with named fields")
            .to_compile_error()
            .into();
    };

    if let Some(clash) = fields.named.iter().find(|field| {
        field
            .ident
            .as_ref()
            .is_some_and(|ident| ident == "id" || ident == "created_at")
    }) {
        return syn::Error::new_spanned(clash, "base_entity already provides this column")
            .to_compile_error()
            .into();
    }

    let mut columns: Punctuated<syn::Field, syn::Token![,]> = Punctuated::new();
    columns.push(syn::parse_quote! {
        #[sea_orm(primary_key)]
        pub id: i32
    });
    columns.push(syn::parse_quote! {
        #[sea_orm(default_expr = "Expr::current_timestamp()")]
        pub created_at: sea_orm::entity::prelude::DateTimeWithTimeZone
    });
    columns.extend(fields.named.iter().cloned());
    fields.named = columns;

    let expanded = quote! {
        #input

        impl crate::db::dao::base_traits::TimestampedActiveModel for ActiveModel {
            fn set_created_at(
                &mut self,
                ts: sea_orm::entity::prelude::DateTimeWithTimeZone,
            ) {
                self.created_at = sea_orm::ActiveValue::Set(ts);
            }
        }

        impl crate::db::dao::base_traits::CreationOrdered for Entity {
            fn created_at_column() -> Column {
                Column::CreatedAt
            }

            fn id_column() -> Column {
                Column::Id
            }
        }
    };

    expanded.into()
}
