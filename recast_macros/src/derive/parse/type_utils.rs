//! Type introspection helpers.
//!
//! These utilities perform shallow inspection of `syn::Type` values to
//! recognise `Option<T>` wrappers and the collection containers that
//! composed and identity fields may not hold.

use syn::{GenericArgument, PathArguments, Type};

/// Extract the first type argument from a `PathArguments` container.
fn extract_first_type_argument(args: &PathArguments) -> Option<&Type> {
    let PathArguments::AngleBracketed(angle_args) = args else {
        return None;
    };
    let first = angle_args.args.first()?;
    let GenericArgument::Type(inner) = first else {
        return None;
    };
    Some(inner)
}

/// Returns the final path segment of `ty` if it is named `wrapper`.
///
/// The check is shallow: it inspects only the outermost path and supports
/// common fully-qualified forms like `std::option::Option<T>`.
fn last_segment<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a syn::PathSegment> {
    let Type::Path(p) = ty else {
        return None;
    };
    let last = p.path.segments.last()?;
    (last.ident == wrapper).then_some(last)
}

/// Returns the inner type if `ty` is `Option<T>`.
///
/// Not recursive: `Option<Option<T>>` yields `Option<T>`.
pub(crate) fn option_inner(ty: &Type) -> Option<&Type> {
    extract_first_type_argument(&last_segment(ty, "Option")?.arguments)
}

/// Extracts the element type `T` if `ty` is `Vec<T>`.
pub(crate) fn vec_inner(ty: &Type) -> Option<&Type> {
    extract_first_type_argument(&last_segment(ty, "Vec")?.arguments)
}

/// Whether `ty` is a `Vec`, `HashMap`, `BTreeMap`, `HashSet` or `BTreeSet`,
/// looking through one `Option` layer.
pub(crate) fn is_collection(ty: &Type) -> bool {
    let outer = option_inner(ty).unwrap_or(ty);
    vec_inner(outer).is_some()
        || ["HashMap", "BTreeMap", "HashSet", "BTreeSet"]
            .iter()
            .any(|name| last_segment(outer, name).is_some())
}
