//! Accessor-signature detection and registration codegen for `#[expose]`.
//!
//! The attribute looks at the shape of the container's own accessor method
//! instead of asking the author to name the right capability trait. The
//! signature is the declaration: `&[T]` means sequence-by-value, `&mut
//! BTreeMap<K, T>` means mapping-by-out-parameter, and so on.

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{FnArg, GenericArgument, Ident, ImplItem, ImplItemFn, ItemImpl, PathArguments,
    ReturnType, Type};

const KNOWN_SHAPES: [&str; 4] = [
    "sequence_by_value",
    "sequence_by_out_param",
    "map_by_value",
    "map_by_out_param",
];

/// Optional shape pin: `#[expose(sequence_by_value)]`.
pub struct ExposeArgs {
    pinned: Option<Ident>,
}

impl Parse for ExposeArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.is_empty() {
            return Ok(Self { pinned: None });
        }
        let ident: Ident = input.parse()?;
        if !input.is_empty() {
            return Err(input.error("expected a single shape name"));
        }
        if !KNOWN_SHAPES.contains(&ident.to_string().as_str()) {
            return Err(syn::Error::new(
                ident.span(),
                "expected one of `sequence_by_value`, `sequence_by_out_param`, \
                 `map_by_value`, `map_by_out_param`",
            ));
        }
        Ok(Self {
            pinned: Some(ident),
        })
    }
}

/// One recognized accessor pattern.
enum Pattern {
    SeqByValue { elem: Type },
    SeqByOutParam { elem: Type },
    MapByValue { key: Type, elem: Type },
    MapByOutParam { key: Type, elem: Type },
}

impl Pattern {
    fn shape_name(&self) -> &'static str {
        match self {
            Pattern::SeqByValue { .. } => "sequence_by_value",
            Pattern::SeqByOutParam { .. } => "sequence_by_out_param",
            Pattern::MapByValue { .. } => "map_by_value",
            Pattern::MapByOutParam { .. } => "map_by_out_param",
        }
    }
}

pub fn expand(args: ExposeArgs, item: ItemImpl) -> syn::Result<TokenStream2> {
    if item.trait_.is_some() {
        return Err(syn::Error::new_spanned(
            &item,
            "#[expose] goes on the container's inherent impl block, not a trait impl",
        ));
    }

    let mut found: Vec<(Ident, Pattern)> = item
        .items
        .iter()
        .filter_map(|it| match it {
            ImplItem::Fn(method) => classify(method).map(|p| (method.sig.ident.clone(), p)),
            _ => None,
        })
        .collect();

    if let Some(pin) = &args.pinned {
        found.retain(|(_, pattern)| pattern.shape_name() == pin.to_string());
    }

    let (method, pattern) = match found.len() {
        1 => found.remove(0),
        0 => {
            return Err(syn::Error::new_spanned(
                &item,
                "no supported accessor found: expected `fn all(&self) -> &[T]`, \
                 `fn all(&self) -> &Vec<T>`, `fn all(&self) -> &BTreeMap<K, T>`, \
                 `fn all_into(&self, out: &mut Vec<T>)` or \
                 `fn all_into(&self, out: &mut BTreeMap<K, T>)`",
            ));
        }
        _ => {
            return Err(syn::Error::new_spanned(
                &item,
                "multiple collection shapes detected; pin one, \
                 e.g. #[expose(sequence_by_value)]",
            ));
        }
    };

    let self_ty = &item.self_ty;
    let (impl_generics, _, where_clause) = item.generics.split_for_impl();

    // Shaped over sequences leaves the identifier type open; over mappings it
    // is pinned to the key type.
    let mut id_generics = item.generics.clone();
    id_generics.params.push(syn::parse_quote!(__Id));
    let (id_impl_generics, _, id_where_clause) = id_generics.split_for_impl();

    let registration = match &pattern {
        Pattern::SeqByValue { elem } => quote! {
            impl #impl_generics ::uniview::ExposesSequenceByValue<#elem> for #self_ty #where_clause {
                fn all(&self) -> &[#elem] {
                    <#self_ty>::#method(self)
                }
            }

            impl #id_impl_generics ::uniview::Shaped<#elem, __Id> for #self_ty #id_where_clause {
                type Shape = ::uniview::SeqByValue;
            }
        },
        Pattern::SeqByOutParam { elem } => quote! {
            impl #impl_generics ::uniview::ExposesSequenceByOutParam<#elem> for #self_ty #where_clause {
                fn all_into(&self, out: &mut ::uniview::__private::Vec<#elem>) {
                    <#self_ty>::#method(self, out)
                }
            }

            impl #id_impl_generics ::uniview::Shaped<#elem, __Id> for #self_ty #id_where_clause {
                type Shape = ::uniview::SeqByOutParam;
            }
        },
        Pattern::MapByValue { key, elem } => quote! {
            impl #impl_generics ::uniview::ExposesMapByValue<#key, #elem> for #self_ty #where_clause {
                fn all(&self) -> &::uniview::__private::BTreeMap<#key, #elem> {
                    <#self_ty>::#method(self)
                }
            }

            impl #impl_generics ::uniview::Shaped<#elem, #key> for #self_ty #where_clause {
                type Shape = ::uniview::MapByValue;
            }
        },
        Pattern::MapByOutParam { key, elem } => quote! {
            impl #impl_generics ::uniview::ExposesMapByOutParam<#key, #elem> for #self_ty #where_clause {
                fn all_into(&self, out: &mut ::uniview::__private::BTreeMap<#key, #elem>) {
                    <#self_ty>::#method(self, out)
                }
            }

            impl #impl_generics ::uniview::Shaped<#elem, #key> for #self_ty #where_clause {
                type Shape = ::uniview::MapByOutParam;
            }
        },
    };

    Ok(quote! {
        #item
        #registration
    })
}

/// Match one method against the four accessor patterns.
fn classify(method: &ImplItemFn) -> Option<Pattern> {
    let name = method.sig.ident.to_string();
    if name != "all" && name != "all_into" {
        return None;
    }

    let mut inputs = method.sig.inputs.iter();
    match inputs.next()? {
        FnArg::Receiver(recv) if recv.reference.is_some() && recv.mutability.is_none() => {}
        _ => return None,
    }

    let second = inputs.next();
    if inputs.next().is_some() {
        return None;
    }

    match second {
        // fn all(&self) -> <shape>
        None => {
            let ReturnType::Type(_, ty) = &method.sig.output else {
                return None;
            };
            by_value_pattern(ty)
        }
        // fn all_into(&self, out: &mut <shape>)
        Some(FnArg::Typed(arg)) => {
            if !matches!(method.sig.output, ReturnType::Default) {
                return None;
            }
            out_param_pattern(&arg.ty)
        }
        Some(FnArg::Receiver(_)) => None,
    }
}

/// `&[T]`, `&Vec<T>` or `&BTreeMap<K, T>`.
fn by_value_pattern(ty: &Type) -> Option<Pattern> {
    let Type::Reference(reference) = ty else {
        return None;
    };
    if reference.mutability.is_some() {
        return None;
    }
    match &*reference.elem {
        Type::Slice(slice) => Some(Pattern::SeqByValue {
            elem: (*slice.elem).clone(),
        }),
        other => collection_pattern(other, /* by_value: */ true),
    }
}

/// `&mut Vec<T>` or `&mut BTreeMap<K, T>`.
fn out_param_pattern(ty: &Type) -> Option<Pattern> {
    let Type::Reference(reference) = ty else {
        return None;
    };
    if reference.mutability.is_none() {
        return None;
    }
    collection_pattern(&reference.elem, /* by_value: */ false)
}

/// `Vec<T>` / `BTreeMap<K, T>` by the last path segment.
fn collection_pattern(ty: &Type, by_value: bool) -> Option<Pattern> {
    let Type::Path(path) = ty else {
        return None;
    };
    let segment = path.path.segments.last()?;
    let PathArguments::AngleBracketed(generics) = &segment.arguments else {
        return None;
    };
    let args: Vec<&Type> = generics
        .args
        .iter()
        .filter_map(|arg| match arg {
            GenericArgument::Type(ty) => Some(ty),
            _ => None,
        })
        .collect();

    match (segment.ident.to_string().as_str(), args.as_slice()) {
        ("Vec", [elem]) => {
            let elem = (*elem).clone();
            Some(if by_value {
                Pattern::SeqByValue { elem }
            } else {
                Pattern::SeqByOutParam { elem }
            })
        }
        ("BTreeMap", [key, elem]) => {
            let key = (*key).clone();
            let elem = (*elem).clone();
            Some(if by_value {
                Pattern::MapByValue { key, elem }
            } else {
                Pattern::MapByOutParam { key, elem }
            })
        }
        _ => None,
    }
}
