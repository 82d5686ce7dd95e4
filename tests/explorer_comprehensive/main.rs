//! Explorer Comprehensive Test Suite
//!
//! End-to-end checks of the friendgraph public surface.
//!
//! ## Test Tiers
//!
//! - **Tier 1**: Seed graph scenario (A-B, A-C, B-D, B-E, C-F, C-G)
//! - **Tier 2**: Mutation scenarios through the Explorer API
//! - **Tier 3**: Graph properties over random graphs (proptest)
//! - **Tier 4**: Dataset and config files
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test explorer_comprehensive
//! ```


// Tier 1: Seed Scenario
mod tier1_seed_scenario;

// Tier 2: Mutations
mod tier2_mutation_scenarios;


// Tier 4: Files
mod tier4_dataset_files;
