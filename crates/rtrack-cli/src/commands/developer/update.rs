use rtrack_db::updates::developer::DeveloperUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub clear_email: bool,
    pub modules: Vec<String>,
    pub clear_modules: bool,
}

impl Params {
    /// Replacement module set: `None` keeps the current links.
    fn module_links(&self) -> Option<&[String]> {
        if self.clear_modules {
            Some(&[][..])
        } else if self.modules.is_empty() {
            None
        } else {
            Some(self.modules.as_slice())
        }
    }
}

pub async fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut builder = DeveloperUpdateBuilder::new();
    if let Some(name) = params.name.as_deref() {
        builder = builder.name(name);
    }
    if let Some(email) = params.email.clone() {
        builder = builder.email(Some(email));
    } else if params.clear_email {
        builder = builder.email(None);
    }

    let developer = ctx
        .service
        .update_developer_with_modules(&params.id, &builder.build(), params.module_links())
        .await?;
    output(&developer, flags.format)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::Params;

    fn params(modules: &[&str], clear_modules: bool) -> Params {
        Params {
            id: "dev-1".to_string(),
            name: None,
            email: None,
            clear_email: false,
            modules: modules.iter().map(ToString::to_string).collect(),
            clear_modules,
        }
    }

    #[test]
    fn no_module_flags_keep_links() {
        assert_eq!(params(&[], false).module_links(), None);
    }

    #[test]
    fn module_flags_replace_links() {
        let p = params(&["mod-1", "mod-2"], false);
        assert_eq!(
            p.module_links(),
            Some(&["mod-1".to_string(), "mod-2".to_string()][..])
        );
    }

    #[test]
    fn clear_modules_empties_links() {
        assert_eq!(params(&[], true).module_links(), Some(&[][..]));
    }
}
