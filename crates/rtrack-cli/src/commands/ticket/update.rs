use rtrack_db::updates::ticket::{TicketUpdate, TicketUpdateBuilder};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TicketField;
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub qa_status: Option<String>,
    pub dev: Option<String>,
    pub team: Option<String>,
    pub environment: Option<String>,
    pub release: Option<String>,
    pub unassign: bool,
    pub code_freeze: Option<bool>,
    pub clear: Vec<TicketField>,
}

pub async fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let update = build_update(&params)?;
    let ticket = ctx.service.update_ticket(&params.id, &update).await?;
    output(&ticket, flags.format)
}

/// Set values win over `--clear` for the same field.
fn build_update(params: &Params) -> anyhow::Result<TicketUpdate> {
    let has_change = params.title.is_some()
        || params.description.is_some()
        || params.status.is_some()
        || params.qa_status.is_some()
        || params.dev.is_some()
        || params.team.is_some()
        || params.environment.is_some()
        || params.release.is_some()
        || params.unassign
        || params.code_freeze.is_some()
        || !params.clear.is_empty();
    if !has_change {
        anyhow::bail!("ticket update requires at least one field to change");
    }

    let mut builder = TicketUpdateBuilder::new();
    for field in &params.clear {
        builder = match field {
            TicketField::Description => builder.description(None),
            TicketField::Status => builder.status_id(None),
            TicketField::QaStatus => builder.qa_status_id(None),
            TicketField::Dev => builder.dev_id(None),
            TicketField::Team => builder.team_id(None),
            TicketField::Environment => builder.environment_id(None),
        };
    }

    if let Some(title) = params.title.clone() {
        builder = builder.title(title);
    }
    if let Some(description) = params.description.clone() {
        builder = builder.description(Some(description));
    }
    if let Some(status) = params.status.clone() {
        builder = builder.status_id(Some(status));
    }
    if let Some(qa_status) = params.qa_status.clone() {
        builder = builder.qa_status_id(Some(qa_status));
    }
    if let Some(dev) = params.dev.clone() {
        builder = builder.dev_id(Some(dev));
    }
    if let Some(team) = params.team.clone() {
        builder = builder.team_id(Some(team));
    }
    if let Some(environment) = params.environment.clone() {
        builder = builder.environment_id(Some(environment));
    }
    if let Some(release) = params.release.clone() {
        builder = builder.release_id(Some(release));
    } else if params.unassign {
        builder = builder.release_id(None);
    }
    if let Some(code_freeze) = params.code_freeze {
        builder = builder.code_freeze(code_freeze);
    }
    Ok(builder.build())
}
