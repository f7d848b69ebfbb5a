//! Core type aliases, traits, and constants for the alpha-beta visualizer.
//!
//! This crate provides the foundational types and configuration parameters
//! used throughout the abv workspace.

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Leaf payoffs, backed-up values, and alpha/beta bounds.
pub type Utility = f64;
/// Distance from the root, in edges.
pub type Depth = usize;
/// Number of children below an internal node.
pub type Width = usize;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and demo trees.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// IDENTITY TYPES
// ============================================================================
use std::cmp::Ordering;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::hash::Hash;
use std::hash::Hasher;
use std::marker::PhantomData;

/// Generic ID wrapper providing compile-time type safety over uuid::Uuid.
pub struct ID<T> {
    inner: uuid::Uuid,
    marker: PhantomData<T>,
}

impl<T> ID<T> {
    pub fn inner(&self) -> uuid::Uuid {
        self.inner
    }
}

impl<T> From<ID<T>> for uuid::Uuid {
    fn from(id: ID<T>) -> Self {
        id.inner()
    }
}
impl<T> From<uuid::Uuid> for ID<T> {
    fn from(inner: uuid::Uuid) -> Self {
        Self {
            inner,
            marker: PhantomData,
        }
    }
}

impl<T> Default for ID<T> {
    fn default() -> Self {
        Self {
            inner: uuid::Uuid::now_v7(),
            marker: PhantomData,
        }
    }
}

impl<T> Copy for ID<T> {}
impl<T> Clone for ID<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Eq for ID<T> {}
impl<T> PartialEq for ID<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T> Ord for ID<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}
impl<T> PartialOrd for ID<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Hash for ID<T> {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.inner.hash(state);
    }
}

impl<T> Debug for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ID").field(&self.inner).finish()
    }
}
impl<T> Display for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.inner, f)
    }
}

// ============================================================================
// SEARCH WINDOW
// ============================================================================
/// Alpha at the root before any child has been searched.
pub const ALPHA_INIT: Utility = Utility::NEG_INFINITY;
/// Beta at the root before any child has been searched.
pub const BETA_INIT: Utility = Utility::INFINITY;

// ============================================================================
// EXPORT AND DRAWING
// ============================================================================
/// Trees taller than this export in the flat form. Nested JSON this deep
/// would overrun serde_json's recursion limit on the way back in.
pub const NESTED_EXPORT_DEPTH: Depth = 64;
/// Terminal drawings stop descending past this depth.
pub const DRAW_DEPTH: Depth = 32;

// ============================================================================
// RANDOM TREE SHAPE
// Used by `Arbitrary` impls in tests and by the explorer's --random mode.
// ============================================================================
/// Maximum depth of a randomly generated tree.
pub const RANDOM_TREE_DEPTH: Depth = 4;
/// Maximum children per internal node of a randomly generated tree.
pub const RANDOM_TREE_WIDTH: Width = 3;
/// Leaf values are drawn uniformly from `-RANDOM_LEAF_RANGE..=RANDOM_LEAF_RANGE`.
pub const RANDOM_LEAF_RANGE: i32 = 9;
/// Probability that a non-root node above max depth is cut short into a leaf.
pub const RANDOM_LEAF_CHANCE: f64 = 0.2;

// ============================================================================
// HOSTING
// ============================================================================
/// Bind address when BIND_ADDR is unset.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
/// actix worker threads when ABV_WORKERS is unset.
pub const DEFAULT_WORKERS: usize = 4;
/// Live sessions allowed at once when ABV_MAX_SESSIONS is unset.
pub const DEFAULT_MAX_SESSIONS: usize = 1024;
/// Service name reported by the health endpoint.
pub const SERVICE_NAME: &str = "alpha-beta-visualizer";
/// Service version reported by the health endpoint.
pub const SERVICE_VERSION: &str = "1.0.0";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Register Ctrl+C handler for immediate (non-graceful) termination.
/// Sessions are in-memory only, so there is nothing to flush.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!();
            log::warn!("interrupt received, exiting immediately");
            std::process::exit(0);
        }
    });
}
