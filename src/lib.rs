//! Solid tour: capability-based substitution, one scenario per principle.
//!
//! Each scenario declares a capability as a trait, provides a handful of
//! concrete variants, and a consumer that only ever talks to the trait.
//!
//! # Architecture
//!
//! Scenarios follow hexagonal architecture principles:
//!
//! - **Domain**: Plain records with no infrastructure dependencies
//! - **Ports**: Capability traits consumers depend on
//! - **Adapters**: Concrete variants implementing those traits
//! - **Services**: Consumers that receive their collaborators at
//!   construction
//!
//! # Modules
//!
//! - [`shape`]: Area totalizing over any shape
//! - [`animal`]: Substitutable sound-emitting animals
//! - [`device`]: Segregated printer, scanner and fax capabilities
//! - [`customer`]: Customer persistence and registration
//! - [`order`]: Order processing with an injected logger, and inventory
//! - [`console`]: Line output shared by every scenario
//! - [`tour`]: Runs each scenario once
//! - [`telemetry`]: Structured logging setup

pub mod animal;
pub mod console;
pub mod customer;
pub mod device;
pub mod order;
pub mod shape;
pub mod telemetry;
pub mod tour;
