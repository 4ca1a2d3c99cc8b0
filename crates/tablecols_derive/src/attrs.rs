//! Attribute parsing for `#[derive(Columns)]`.
//!
//! Reads `#[column(...)]` overrides plus the serde attributes that change how a field is serialized
//! (`rename`, `rename_all`, `skip`, `skip_serializing`, `flatten`). Only serialize-side names count. Other serde keys are
//! consumed and ignored.

use syn::meta::ParseNestedMeta;
use syn::{Attribute, Expr, ExprLit, Lit, LitBool, LitStr, Token, UnOp};
use tablecols_core::{CellType, RenameRule, SortDirection};

/// Overrides collected from `#[column(...)]`.
#[derive(Debug, Default)]
pub struct ColumnAttrs {
    pub skip: bool,
    pub data: Option<String>,
    pub title: Option<String>,
    pub visible: Option<bool>,
    pub searchable: Option<bool>,
    pub orderable: Option<bool>,
    pub width: Option<String>,
    pub class_name: Option<String>,
    pub cell_type: Option<CellType>,
    pub content_padding: Option<String>,
    pub default_content: Option<String>,
    pub name: Option<String>,
    pub order_data: Option<Vec<usize>>,
    pub order_data_type: Option<String>,
    pub order_sequence: Option<Vec<SortDirection>>,
    pub column_type: Option<String>,
    pub footer: Option<String>,
    pub aria_title: Option<String>,
    pub responsive_priority: Option<i32>,
    pub order: Option<i32>,
    /// At least one override key was given.
    pub annotated: bool,
}

/// Serde attributes relevant to column mapping.
#[derive(Debug, Default)]
pub struct SerdeFieldAttrs {
    pub rename: Option<String>,
    pub skip: bool,
    /// `#[serde(flatten)]`: the field's own keys are inlined into the row.
    pub flatten: bool,
}

/// Parse every `#[column(...)]` attribute on a field.
pub fn parse_column_attrs(attrs: &[Attribute]) -> syn::Result<ColumnAttrs> {
    let mut result = ColumnAttrs::default();

    for attr in attrs {
        if !attr.path().is_ident("column") {
            continue;
        }
        attr.parse_nested_meta(|meta| parse_column_meta(&meta, &mut result))?;
    }

    Ok(result)
}

fn parse_column_meta(meta: &ParseNestedMeta, result: &mut ColumnAttrs) -> syn::Result<()> {
    let ident = meta.path.get_ident().map(|i| i.to_string());

    match ident.as_deref() {
        Some("skip") => {
            result.skip = true;
            return Ok(());
        }
        Some("data") => result.data = Some(parse_string(meta)?),
        Some("title") => result.title = Some(parse_string(meta)?),
        Some("visible") => result.visible = Some(parse_bool(meta)?),
        Some("searchable") => result.searchable = Some(parse_bool(meta)?),
        Some("orderable") => result.orderable = Some(parse_bool(meta)?),
        Some("width") => result.width = Some(parse_string(meta)?),
        Some("class_name") => result.class_name = Some(parse_string(meta)?),
        Some("cell_type") => {
            let lit: LitStr = meta.value()?.parse()?;
            match CellType::parse(&lit.value()) {
                Some(cell_type) => result.cell_type = Some(cell_type),
                None => return Err(syn::Error::new_spanned(lit, "invalid cell_type, expected \"td\" or \"th\"")),
            }
        }
        Some("content_padding") => result.content_padding = Some(parse_string(meta)?),
        Some("default_content") => result.default_content = Some(parse_string(meta)?),
        Some("name") => result.name = Some(parse_string(meta)?),
        Some("order_data") => result.order_data = Some(parse_indices(meta)?),
        Some("order_data_type") => result.order_data_type = Some(parse_string(meta)?),
        Some("order_sequence") => result.order_sequence = Some(parse_sort_directions(meta)?),
        Some("type") => result.column_type = Some(parse_string(meta)?),
        Some("footer") => result.footer = Some(parse_string(meta)?),
        Some("aria_title") => result.aria_title = Some(parse_string(meta)?),
        Some("responsive_priority") => result.responsive_priority = Some(parse_i32(meta)?),
        Some("order") => result.order = Some(parse_i32(meta)?),
        _ => return Err(meta.error("unsupported column attribute")),
    }

    result.annotated = true;
    Ok(())
}

fn parse_string(meta: &ParseNestedMeta) -> syn::Result<String> {
    let lit: LitStr = meta.value()?.parse()?;
    Ok(lit.value())
}

/// `key` alone means `true`; `key = false` is explicit.
fn parse_bool(meta: &ParseNestedMeta) -> syn::Result<bool> {
    if meta.input.peek(Token![=]) {
        let lit: LitBool = meta.value()?.parse()?;
        Ok(lit.value)
    } else {
        Ok(true)
    }
}

fn parse_i32(meta: &ParseNestedMeta) -> syn::Result<i32> {
    let expr: Expr = meta.value()?.parse()?;
    int_from_expr(&expr)
}

fn int_from_expr(expr: &Expr) -> syn::Result<i32> {
    let value = signed_from_expr(expr)?;
    i32::try_from(value).map_err(|_| syn::Error::new_spanned(expr, "integer out of range for i32"))
}

fn signed_from_expr(expr: &Expr) -> syn::Result<i64> {
    match expr {
        Expr::Lit(ExprLit { lit: Lit::Int(int), .. }) => int.base10_parse::<i64>(),
        Expr::Unary(unary) if matches!(unary.op, UnOp::Neg(_)) => Ok(-signed_from_expr(&unary.expr)?),
        _ => Err(syn::Error::new_spanned(expr, "expected an integer literal")),
    }
}

fn index_from_expr(expr: &Expr) -> syn::Result<usize> {
    match expr {
        Expr::Lit(ExprLit { lit: Lit::Int(int), .. }) => int.base10_parse::<usize>(),
        _ => Err(syn::Error::new_spanned(expr, "expected a column index")),
    }
}

/// `order_data = 2` or `order_data = [2, 0]`.
fn parse_indices(meta: &ParseNestedMeta) -> syn::Result<Vec<usize>> {
    let expr: Expr = meta.value()?.parse()?;
    match &expr {
        Expr::Array(array) => array.elems.iter().map(index_from_expr).collect(),
        other => Ok(vec![index_from_expr(other)?]),
    }
}

/// `order_sequence = ["desc", "asc"]`.
fn parse_sort_directions(meta: &ParseNestedMeta) -> syn::Result<Vec<SortDirection>> {
    let expr: Expr = meta.value()?.parse()?;
    let Expr::Array(array) = &expr else {
        return Err(syn::Error::new_spanned(expr, "expected an array like [\"asc\", \"desc\"]"));
    };

    array
        .elems
        .iter()
        .map(|elem| match elem {
            Expr::Lit(ExprLit { lit: Lit::Str(s), .. }) => SortDirection::parse(&s.value())
                .ok_or_else(|| syn::Error::new_spanned(s, "invalid sort direction, expected \"asc\" or \"desc\"")),
            other => Err(syn::Error::new_spanned(other, "expected a string literal")),
        })
        .collect()
}

/// Extract `rename`, `skip`, `skip_serializing` and `flatten` from a field's `#[serde(...)]` attributes.
pub fn parse_serde_field_attrs(attrs: &[Attribute]) -> syn::Result<SerdeFieldAttrs> {
    let mut result = SerdeFieldAttrs::default();

    for attr in attrs {
        if !attr.path().is_ident("serde") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                if let Some(value) = parse_serde_string_value(&meta)? {
                    result.rename.get_or_insert(value);
                }
            } else if meta.path.is_ident("skip") || meta.path.is_ident("skip_serializing") {
                result.skip = true;
            } else if meta.path.is_ident("flatten") {
                result.flatten = true;
            } else {
                skip_meta_value(&meta)?;
            }
            Ok(())
        })?;
    }

    Ok(result)
}

/// Extract the container's `#[serde(rename_all = "...")]` rule, if any.
pub fn serde_rename_all_from_attrs(attrs: &[Attribute]) -> syn::Result<RenameRule> {
    let mut rule = RenameRule::None;

    for attr in attrs {
        if !attr.path().is_ident("serde") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename_all") {
                if let Some(value) = parse_serde_string_value(&meta)? {
                    if let Some(parsed) = RenameRule::from_serde(&value) {
                        rule = parsed;
                    }
                }
            } else {
                skip_meta_value(&meta)?;
            }
            Ok(())
        })?;
    }

    Ok(rule)
}

/// Read the serialize-side name from `key = "value"` or `key(serialize = "value", ...)`.
///
/// A parenthesised form with only `deserialize = "..."` yields `None`: serialization keeps the default name.
fn parse_serde_string_value(meta: &ParseNestedMeta) -> syn::Result<Option<String>> {
    if meta.input.peek(Token![=]) {
        let value: Expr = meta.value()?.parse()?;
        if let Expr::Lit(ExprLit { lit: Lit::Str(lit), .. }) = value {
            return Ok(Some(lit.value()));
        }
        return Ok(None);
    }

    if meta.input.is_empty() || meta.input.peek(Token![,]) {
        return Ok(None);
    }

    let mut value: Option<String> = None;
    meta.parse_nested_meta(|nested| {
        if nested.path.is_ident("serialize") {
            if let Some(rename) = parse_serde_string_value(&nested)? {
                value = Some(rename);
            }
        } else {
            skip_meta_value(&nested)?;
        }
        Ok(())
    })?;

    Ok(value)
}

/// Consume whatever follows a meta path we don't care about.
fn skip_meta_value(meta: &ParseNestedMeta) -> syn::Result<()> {
    if meta.input.peek(Token![=]) {
        let _: Expr = meta.value()?.parse()?;
    } else if meta.input.peek(syn::token::Paren) {
        meta.parse_nested_meta(|nested| skip_meta_value(&nested))?;
    }
    Ok(())
}
