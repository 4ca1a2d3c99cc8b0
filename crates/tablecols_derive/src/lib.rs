//! Derive macro for tablecols.
//!
//! `#[derive(Columns)]` implements `tablecols::ColumnSchema` for a struct with named fields, describing each public
//! field the way the type serializes it:
//! - `#[serde(rename = "...")]` and the container's `#[serde(rename_all = "...")]` set the declared serialization name
//! - `#[serde(skip)]`, `#[serde(skip_serializing)]` and `#[column(skip)]` mark the field as ignored
//! - `#[serde(flatten)]` fields are ignored: their inner keys are inlined into the row, so the field itself has no
//!   key a column could read. Describe the inlined keys on the outer type if they need columns.
//! - `#[column(...)]` supplies per-column overrides (`title`, `visible`, `searchable`, ...)

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Field, Fields, Visibility, parse_macro_input};
use tablecols_core::{CellType, RenameRule, SortDirection};

mod attrs;

use attrs::{ColumnAttrs, parse_column_attrs, parse_serde_field_attrs, serde_rename_all_from_attrs};

/// Generates the `ColumnSchema` implementation for a struct.
///
/// # Example
/// ```ignore
/// #[derive(Serialize, Columns)]
/// #[serde(rename_all = "camelCase")]
/// pub struct Customer {
///     #[column(title = "Customer #", orderable)]
///     pub customer_id: i64,
///     #[serde(skip)]
///     pub password_hash: String,
///     #[column(visible = false)]
///     pub internal_code: String,
/// }
///
/// // Generates:
/// impl tablecols::ColumnSchema for Customer {
///     fn column_fields() -> Vec<tablecols::FieldMetadata> { /* customerId, passwordHash (ignored), internalCode */ }
/// }
/// ```
#[proc_macro_derive(Columns, attributes(column))]
pub fn derive_columns(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand_columns(&input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(err) => TokenStream::from(err.to_compile_error()),
    }
}

fn expand_columns(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    name,
                    "Columns can only be derived for structs with named fields",
                ));
            }
        },
        _ => return Err(syn::Error::new_spanned(name, "Columns can only be derived for structs")),
    };

    let rename_all = serde_rename_all_from_attrs(&input.attrs)?;

    let mut described = Vec::new();
    for field in fields {
        // Only public instance fields become columns
        if !matches!(field.vis, Visibility::Public(_)) {
            continue;
        }
        described.push(field_metadata(field, rename_all)?);
    }

    Ok(quote! {
        impl #impl_generics ::tablecols::ColumnSchema for #name #ty_generics #where_clause {
            fn column_fields() -> ::std::vec::Vec<::tablecols::FieldMetadata> {
                ::std::vec![#(#described),*]
            }
        }
    })
}

fn field_metadata(field: &Field, rename_all: RenameRule) -> syn::Result<TokenStream2> {
    let Some(ident) = field.ident.as_ref() else {
        return Err(syn::Error::new_spanned(field, "expected a named field"));
    };
    let field_name = ident.unraw().to_string();

    let column = parse_column_attrs(&field.attrs)?;
    let serde = parse_serde_field_attrs(&field.attrs)?;

    let serialized_name = match serde.rename {
        Some(rename) => Some(rename),
        None if rename_all != RenameRule::None => Some(rename_all.apply(&field_name)),
        None => None,
    };
    let serialized_name = opt_string(serialized_name.as_deref());
    let ignore = serde.skip || serde.flatten || column.skip;
    let annotation = if column.annotated {
        let annotation = annotation_tokens(&column);
        quote!(::std::option::Option::Some(#annotation))
    } else {
        quote!(::std::option::Option::None)
    };

    Ok(quote! {
        ::tablecols::FieldMetadata {
            name: ::std::string::String::from(#field_name),
            serialized_name: #serialized_name,
            ignore: #ignore,
            annotation: #annotation,
        }
    })
}

fn annotation_tokens(column: &ColumnAttrs) -> TokenStream2 {
    let data = opt_string(column.data.as_deref());

    let mut options = Vec::new();
    let mut set = |key: &str, value: TokenStream2| {
        let key = syn::Ident::new(key, proc_macro2::Span::call_site());
        options.push(quote!(#key: ::std::option::Option::Some(#value)));
    };

    let strings = [
        ("title", &column.title),
        ("width", &column.width),
        ("class_name", &column.class_name),
        ("content_padding", &column.content_padding),
        ("default_content", &column.default_content),
        ("name", &column.name),
        ("order_data_type", &column.order_data_type),
        ("column_type", &column.column_type),
        ("footer", &column.footer),
        ("aria_title", &column.aria_title),
    ];
    for (key, value) in strings {
        if let Some(value) = value {
            set(key, quote!(::std::string::String::from(#value)));
        }
    }

    for (key, value) in [
        ("visible", column.visible),
        ("searchable", column.searchable),
        ("orderable", column.orderable),
    ] {
        if let Some(value) = value {
            set(key, quote!(#value));
        }
    }

    for (key, value) in [("responsive_priority", column.responsive_priority), ("order", column.order)] {
        if let Some(value) = value {
            set(key, quote!(#value));
        }
    }

    if let Some(cell_type) = column.cell_type {
        let variant = match cell_type {
            CellType::Td => quote!(Td),
            CellType::Th => quote!(Th),
        };
        set("cell_type", quote!(::tablecols::CellType::#variant));
    }

    if let Some(indices) = &column.order_data {
        set("order_data", quote!(::std::vec![#(#indices),*]));
    }

    if let Some(directions) = &column.order_sequence {
        let directions = directions.iter().map(|direction| match direction {
            SortDirection::Asc => quote!(::tablecols::SortDirection::Asc),
            SortDirection::Desc => quote!(::tablecols::SortDirection::Desc),
        });
        set("order_sequence", quote!(::std::vec![#(#directions),*]));
    }

    quote! {
        ::tablecols::ColumnAnnotation {
            data: #data,
            options: ::tablecols::ColumnOptions {
                #(#options,)*
                ..::core::default::Default::default()
            },
        }
    }
}

fn opt_string(value: Option<&str>) -> TokenStream2 {
    match value {
        Some(value) => quote!(::std::option::Option::Some(::std::string::String::from(#value))),
        None => quote!(::std::option::Option::None),
    }
}
