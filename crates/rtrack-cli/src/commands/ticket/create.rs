use rtrack_core::drafts::NewTicket;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub title: String,
    pub description: Option<String>,
    pub status: Option<String>,
    pub qa_status: Option<String>,
    pub dev: Option<String>,
    pub team: Option<String>,
    pub environment: Option<String>,
    pub release: Option<String>,
    pub code_freeze: bool,
}

pub async fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let draft = NewTicket {
        title: params.title,
        description: params.description,
        status_id: params.status,
        qa_status_id: params.qa_status,
        dev_id: params.dev,
        team_id: params.team,
        environment_id: params.environment,
        release_id: params.release,
        code_freeze: params.code_freeze,
    };
    let ticket = ctx.service.create_ticket(&draft).await?;
    output(&ticket, flags.format)
}
