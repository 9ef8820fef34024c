#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Outbound-call authentication for actions and the action domain model.
//!
//! Layout: `model.rs` (schemes and typed authentication values),
//! `mapper.rs` (validation/construction and the scheme-only projection),
//! `action.rs` (action requests and stored actions), `rules.rs` (the rule
//! compilation seam), `error.rs` (error taxonomy).

pub mod action;
pub mod error;
pub mod mapper;
pub mod model;
pub mod rules;

pub use action::{Action, ActionRequest, ActionRule, ActionStatus, ActionType, EndpointConfig};
pub use error::{AuthError, AuthResult, RuleMappingError, UnknownActionType};
pub use mapper::{build_authentication, build_authentication_from_tag, summarize};
pub use model::{
    ApiKeyAuth, AuthProperty, AuthenticationConfig, AuthenticationScheme, BasicAuth, BearerAuth,
    PropertyBag, SchemeSummary, Secret,
};
pub use rules::{OpaqueRuleMapper, RuleMapper};
