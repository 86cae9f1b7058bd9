//! Berth AWS Provider
//!
//! Typed bindings for the ECS resources and data sources of the Terraform
//! AWS provider.
//!
//! ## Module Structure
//!
//! - `resources` - Generated resource bindings (`aws_ecs_*`)
//! - `data_sources` - Generated data source bindings
//! - `registry` - Lookup and construction of any type by its type string
//!
//! ```ignore
//! use berth_core::Stack;
//! use berth_provider_aws::resources::ecs_cluster::{EcsCluster, EcsClusterConfig};
//!
//! let mut stack = Stack::new("app");
//! berth_provider_aws::configure(&mut stack);
//! let config = EcsClusterConfig::builder().name("demo").build()?;
//! let cluster = EcsCluster::new(&mut stack, "main", config)?;
//! println!("{}", stack.to_json()?);
//! ```

pub mod data_sources;
pub mod registry;
pub mod resources;

pub use registry::{build, schema_for, schemas};

use berth_core::Stack;

/// Local name of the provider in `required_providers`
pub const PROVIDER_NAME: &str = "aws";

/// Registry source address of the provider
pub const PROVIDER_SOURCE: &str = "hashicorp/aws";

/// Version constraint the bindings were generated against
pub const PROVIDER_VERSION: &str = "~> 4.0";

/// The provider schema document the bindings are generated from
pub const SCHEMA_JSON: &str = include_str!("../schemas/aws_ecs.json");

/// Declare the AWS provider as required by `stack`
pub fn configure(stack: &mut Stack) {
    stack.required_provider(PROVIDER_NAME, PROVIDER_SOURCE, Some(PROVIDER_VERSION));
}
