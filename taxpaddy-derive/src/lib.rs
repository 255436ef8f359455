use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Lit, LitStr, Meta, Type};

/// Derive macro describing a CSV input record from its struct fields.
///
/// For each field, extracts:
/// - Column name (respects #[serde(rename = "...")])
/// - Required (false for `Option<T>` and for fields marked `#[serde(default)]`)
/// - Description (from doc comments)
///
/// Generates `csv_schema() -> &'static [CsvField]` and
/// `csv_header() -> &'static [&'static str]`. The deriving crate must expose
/// `crate::core::CsvField`.
#[proc_macro_derive(CsvSchema, attributes(serde))]
pub fn derive_csv_schema(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return syn::Error::new_spanned(name, "CsvSchema only supports named fields")
                    .to_compile_error()
                    .into()
            }
        },
        _ => {
            return syn::Error::new_spanned(name, "CsvSchema only supports structs")
                .to_compile_error()
                .into()
        }
    };

    let mut columns = Vec::new();
    for field in fields {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let attrs = match SerdeAttrs::parse(&field.attrs) {
            Ok(attrs) => attrs,
            Err(err) => return err.to_compile_error().into(),
        };
        if attrs.skip {
            continue;
        }
        let column = attrs.rename.unwrap_or_else(|| ident.to_string());
        let required = !attrs.default && !is_option_type(&field.ty);
        let doc = get_doc_comment(&field.attrs);
        columns.push((column, required, doc));
    }

    let field_entries = columns.iter().map(|(column, required, desc)| {
        quote! {
            crate::core::CsvField {
                name: #column,
                required: #required,
                description: #desc,
            }
        }
    });
    let header_entries = columns.iter().map(|(column, _, _)| quote! { #column });

    let expanded = quote! {
        impl #name {
            pub fn csv_schema() -> &'static [crate::core::CsvField] {
                static SCHEMA: &[crate::core::CsvField] = &[
                    #(#field_entries),*
                ];
                SCHEMA
            }

            pub fn csv_header() -> &'static [&'static str] {
                static HEADER: &[&str] = &[
                    #(#header_entries),*
                ];
                HEADER
            }
        }
    };

    TokenStream::from(expanded)
}

/// The subset of `#[serde(...)]` field attributes that change the CSV shape.
#[derive(Default)]
struct SerdeAttrs {
    rename: Option<String>,
    default: bool,
    skip: bool,
}

impl SerdeAttrs {
    fn parse(attrs: &[syn::Attribute]) -> syn::Result<Self> {
        let mut parsed = SerdeAttrs::default();
        for attr in attrs.iter().filter(|a| a.path().is_ident("serde")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    let value: LitStr = meta.value()?.parse()?;
                    parsed.rename = Some(value.value());
                } else if meta.path.is_ident("default") {
                    parsed.default = true;
                    if meta.input.peek(syn::Token![=]) {
                        let _: LitStr = meta.value()?.parse()?;
                    }
                } else if meta.path.is_ident("skip") || meta.path.is_ident("skip_deserializing") {
                    parsed.skip = true;
                } else if meta.input.peek(syn::Token![=]) {
                    // deserialize_with, alias, skip_serializing_if, ...
                    let _: syn::Expr = meta.value()?.parse()?;
                } else if meta.input.peek(syn::token::Paren) {
                    let _content;
                    syn::parenthesized!(_content in meta.input);
                }
                Ok(())
            })?;
        }
        Ok(parsed)
    }
}

fn get_doc_comment(attrs: &[syn::Attribute]) -> String {
    attrs
        .iter()
        .filter_map(|attr| {
            if !attr.path().is_ident("doc") {
                return None;
            }
            if let Meta::NameValue(meta) = &attr.meta {
                if let syn::Expr::Lit(expr_lit) = &meta.value {
                    if let Lit::Str(lit_str) = &expr_lit.lit {
                        return Some(lit_str.value().trim().to_string());
                    }
                }
            }
            None
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_option_type(ty: &Type) -> bool {
    if let Type::Path(type_path) = ty {
        if let Some(segment) = type_path.path.segments.last() {
            return segment.ident == "Option";
        }
    }
    false
}
