use syn::ext::IdentExt;

#[derive(Debug)]
pub(crate) struct Field {
    /// Field identifier
    pub(crate) ident: syn::Ident,

    /// Declared name, without any raw identifier prefix
    pub(crate) name: String,

    /// True for `pub` fields. Other fields are declared but not mapped.
    pub(crate) exported: bool,

    /// Property tag: `#[cypher("name")]` or `#[cypher("name,<options>")]`
    pub(crate) tag: Option<syn::LitStr>,

    /// Field type
    pub(crate) ty: syn::Type,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "record fields must be named"));
        };

        let mut tag = None;

        for attr in &field.attrs {
            if !attr.path().is_ident("cypher") {
                continue;
            }

            if tag.is_some() {
                return Err(syn::Error::new_spanned(
                    attr,
                    "duplicate #[cypher] attribute",
                ));
            }

            let lit: syn::LitStr = attr.parse_args().map_err(|_| {
                syn::Error::new_spanned(attr, "expected #[cypher(\"<property>\")]")
            })?;

            tag = Some(lit);
        }

        Ok(Self {
            ident: ident.clone(),
            name: ident.unraw().to_string(),
            exported: matches!(field.vis, syn::Visibility::Public(_)),
            tag,
            ty: field.ty.clone(),
        })
    }
}
