#![warn(
    clippy::doc_markdown,
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs
)]

#![doc = include_str!("../README.md")]

///
/// Event data (compressed event logs)
///
pub mod event_log {
    /// [`VariantLog`] struct (compressed event log)
    pub mod variant_log;
    /// Minimum self-distance of activities and its witnesses
    pub mod msd;

    pub use variant_log::VariantLog;
}

///
/// Directly-follows graph
///
pub mod dfg {
    /// [`DirectlyFollowsGraph`] struct
    pub mod dfg_struct;

    #[doc(inline)]
    pub use crate::dfg::dfg_struct::DirectlyFollowsGraph;
}

///
/// Process Discovery
///
pub mod discovery {
    ///
    /// Inductive Miner
    ///
    pub mod inductive {
        /// Input data of the Inductive Miner cuts ([`IMDataStructure`])
        pub mod data_structure;
        pub mod cuts;

        pub use data_structure::{IMDataStructure, InductiveDFG};
    }
}

/// Import/Export of [`DirectlyFollowsGraph`] and [`VariantLog`] as (gzipped) JSON
pub mod io;


#[doc(inline)]
pub use dfg::DirectlyFollowsGraph;

#[doc(inline)]
pub use event_log::VariantLog;

#[doc(inline)]
pub use discovery::inductive::{IMDataStructure, InductiveDFG};

#[doc(inline)]
pub use discovery::inductive::cuts::concurrency::ConcurrencyCut;

#[doc(inline)]
pub use discovery::inductive::cuts::{ActivityGroup, Cut, CutParameters, OperatorType};
