/// Galaxy3D Engine - Singleton manager for frame graph subsystems
///
/// Holds the global target registry and the installed logger. Both live in
/// thread-safe static storage (OnceLock + RwLock). The frame graph itself is
/// owned by the render thread and is not a singleton.

use std::sync::{OnceLock, RwLock, Arc, Mutex};
use std::time::SystemTime;
use crate::target::TargetManager;
use crate::error::{Result, Error};
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};

// ===== INTERNAL STATE =====

/// Global engine state storage
static ENGINE_STATE: OnceLock<EngineState> = OnceLock::new();

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

/// Internal state structure holding all engine singletons
struct EngineState {
    /// Target manager singleton
    target_manager: RwLock<Option<Arc<Mutex<TargetManager>>>>,
}

impl EngineState {
    fn new() -> Self {
        Self {
            target_manager: RwLock::new(None),
        }
    }
}

fn logger() -> &'static RwLock<Box<dyn Logger>> {
    LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)))
}

// ===== PUBLIC API =====

/// Main engine singleton manager
///
/// # Example
///
/// ```no_run
/// use galaxy_3d_frame_graph::galaxy3d::Engine;
///
/// Engine::initialize()?;
/// Engine::create_target_manager()?;
///
/// let targets = Engine::target_manager()?;
/// // targets.lock().unwrap().create_texture(...)
///
/// Engine::shutdown();
/// # Ok::<(), galaxy_3d_frame_graph::galaxy3d::Error>(())
/// ```
pub struct Engine;

impl Engine {
    /// Log errors before returning them
    fn log_and_return_error(error: Error) -> Error {
        match &error {
            Error::InitializationFailed(msg) => {
                crate::engine_error!("galaxy3d::Engine", "Initialization failed: {}", msg);
            }
            Error::BackendError(msg) => {
                crate::engine_error!("galaxy3d::Engine", "Backend error: {}", msg);
            }
            _ => {
                crate::engine_error!("galaxy3d::Engine", "Engine error: {}", error);
            }
        }
        error
    }

    fn state() -> Result<&'static EngineState> {
        ENGINE_STATE.get().ok_or_else(|| Self::log_and_return_error(
            Error::InitializationFailed("Engine not initialized. Call Engine::initialize() first.".to_string())
        ))
    }

    /// Initialize the engine
    ///
    /// Must be called once at startup before creating any subsystem.
    /// Calling it again is harmless.
    pub fn initialize() -> Result<()> {
        ENGINE_STATE.get_or_init(EngineState::new);
        Ok(())
    }

    /// Shutdown the engine and destroy all singletons
    ///
    /// The logger is left in place so shutdown messages still reach it.
    pub fn shutdown() {
        if let Some(state) = ENGINE_STATE.get() {
            if let Ok(mut tm) = state.target_manager.write() {
                *tm = None;
            }
        }
    }

    // ===== TARGET MANAGER API =====

    /// Create and register the target manager singleton
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The engine is not initialized
    /// - A target manager already exists
    /// - The lock is poisoned
    pub fn create_target_manager() -> Result<()> {
        let state = Self::state()?;

        let mut lock = state.target_manager.write()
            .map_err(|_| Self::log_and_return_error(
                Error::BackendError("TargetManager lock poisoned".to_string())
            ))?;

        if lock.is_some() {
            return Err(Self::log_and_return_error(
                Error::InitializationFailed("TargetManager already exists. Call Engine::destroy_target_manager() first.".to_string())
            ));
        }

        *lock = Some(Arc::new(Mutex::new(TargetManager::new())));

        crate::engine_info!("galaxy3d::Engine", "TargetManager singleton created successfully");

        Ok(())
    }

    /// Get the target manager singleton
    ///
    /// # Errors
    ///
    /// Returns an error if the engine is not initialized or the target
    /// manager has not been created.
    pub fn target_manager() -> Result<Arc<Mutex<TargetManager>>> {
        let state = Self::state()?;

        let lock = state.target_manager.read()
            .map_err(|_| Self::log_and_return_error(
                Error::BackendError("TargetManager lock poisoned".to_string())
            ))?;

        lock.clone()
            .ok_or_else(|| Self::log_and_return_error(
                Error::InitializationFailed("TargetManager not created. Call Engine::create_target_manager() first.".to_string())
            ))
    }

    /// Destroy the target manager singleton
    ///
    /// Existing `Arc` references stay valid until dropped.
    pub fn destroy_target_manager() -> Result<()> {
        let state = Self::state()?;

        let mut lock = state.target_manager.write()
            .map_err(|_| Self::log_and_return_error(
                Error::BackendError("TargetManager lock poisoned".to_string())
            ))?;

        *lock = None;

        crate::engine_info!("galaxy3d::Engine", "TargetManager singleton destroyed");

        Ok(())
    }

    /// Reset all singletons for testing (only available in test builds)
    #[cfg(test)]
    pub fn reset_for_testing() {
        if let Some(state) = ENGINE_STATE.get() {
            if let Ok(mut tm) = state.target_manager.write() {
                *tm = None;
            }
        }
    }

    // ===== LOGGING API =====

    /// Replace the installed logger
    ///
    /// # Example
    ///
    /// ```no_run
    /// use galaxy_3d_frame_graph::galaxy3d::{Engine, log::{Logger, LogEntry}};
    ///
    /// struct Silent;
    /// impl Logger for Silent {
    ///     fn log(&self, _entry: &LogEntry) {}
    /// }
    ///
    /// Engine::set_logger(Silent);
    /// ```
    pub fn set_logger<L: Logger + 'static>(logger_impl: L) {
        if let Ok(mut lock) = logger().write() {
            *lock = Box::new(logger_impl);
        }
    }

    /// Reset logger to default (DefaultLogger)
    pub fn reset_logger() {
        if let Ok(mut lock) = logger().write() {
            *lock = Box::new(DefaultLogger);
        }
    }

    /// Log without file:line (used by engine_trace! .. engine_warn!)
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        if let Ok(lock) = logger().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: None,
                line: None,
            });
        }
    }

    /// Log with file:line (used by engine_error!)
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        if let Ok(lock) = logger().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: Some(file),
                line: Some(line),
            });
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
