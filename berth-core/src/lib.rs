//! Berth Core
//!
//! Typed building blocks for describing Terraform resources and data
//! sources in Rust and synthesizing them as Terraform JSON

pub mod block;
pub mod error;
pub mod input;
pub mod meta;
pub mod path;
pub mod resource;
pub mod schema;
pub mod settings;
pub mod stack;
pub mod store;
pub mod synth;

pub use block::{Block, BlockRef, ConfigError, Fields, ListRef};
pub use error::{Error, Result};
pub use input::{AttributeValue, Input};
pub use meta::{Connection, Lifecycle, MetaArguments, Provisioner};
pub use path::{AttributePath, PathError, Segment};
pub use resource::{Reference, Resource, ResourceId, ResourceKind, Value};
pub use schema::{AttributeSchema, AttributeType, BlockSchema, NestingMode, ResourceSchema, TypeError};
pub use settings::Settings;
pub use stack::{RequiredProvider, ResourceHandle, Stack, StackError, TerraformElement};
pub use store::{AttributeStore, AttributeTree};
