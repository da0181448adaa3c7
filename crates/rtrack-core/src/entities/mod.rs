//! Record structs for every catalog table.
//!
//! Each record maps to a table in the libSQL store. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` so the CLI can emit them and
//! downstream consumers can validate the shape.

mod component;
mod developer;
mod matrix;
mod module;
mod reference;
mod release;
mod status;
mod ticket;

pub use component::Component;
pub use developer::{Developer, DeveloperModule, DeveloperWithModules};
pub use matrix::MatrixEntry;
pub use module::Module;
pub use reference::{Environment, Team};
pub use release::{Release, ReleaseWithModule};
pub use status::Status;
pub use ticket::{RelatedRef, StatusRef, Ticket, TicketWithRelations};
