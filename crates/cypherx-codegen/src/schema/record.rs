use super::{ErrorSet, Field};

#[derive(Debug)]
pub(crate) struct Record {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Record fields, in declaration order
    pub(crate) fields: Vec<Field>,
}

impl Record {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let nodes: Vec<&syn::Field> = match &ast.fields {
            syn::Fields::Named(node) => node.named.iter().collect(),
            syn::Fields::Unit => vec![],
            syn::Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    &ast.fields,
                    "record fields must be named",
                ));
            }
        };

        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "record generics are not supported",
            ));
        }

        let mut errs = ErrorSet::new();
        let mut fields = vec![];

        for node in nodes {
            if let Some(field) = errs.check(Field::from_ast(node)) {
                fields.push(field);
            }
        }

        errs.finish(Self {
            ident: ast.ident.clone(),
            fields,
        })
    }
}
