//! Sample grouping by file name conventions.
//!
//! Paired-end files are recognised by a pair of mate markers such as `_R1_`
//! and `_R2_`. The sample key of a marked file is its name up to the last
//! marker occurrence; the key of an unmarked file is its name up to the first
//! dot.
//!
//! | File                | Markers       | Grouping | Key      |
//! |---------------------|---------------|----------|----------|
//! | `s1_R1_001.fq.gz`   | `_R1_`/`_R2_` | paired   | `s1`     |
//! | `s1_R2_001.fq.gz`   | `_R1_`/`_R2_` | paired   | `s1`     |
//! | `s1.nanopore.fq`    | `_R1_`/`_R2_` | unpaired | `s1`     |
//! | `s2_R1.fq`          | `_R1_`/`_R2_` | unpaired | `s2_R1`  |
//!
//! Every sample in the paired grouping must have as many mate-1 as mate-2
//! files; anything else is a [`GroupingError::PairingMismatch`](engine::GroupingError).
//!
//! Marker matching is delimiter-aware by default (see
//! [`MarkerMatch`](markers::MarkerMatch)); plain substring matching is kept as
//! a compatibility mode.

pub mod engine;
pub mod markers;
