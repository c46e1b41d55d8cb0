pub mod files;
pub mod settings;
pub mod store;

pub use files::{
    atomic_write, ensure_data_dir, init_local_data_dir, read_file, tasks_file, LOG_FILE_NAME,
    SETTINGS_FILE_NAME, TASKS_FILE_NAME,
};
pub use settings::{load_settings, save_settings, AppSettings};
pub use store::TaskStore;
