pub mod change;
pub mod listeners;
pub mod record_list_model;


pub use change::{ChangeKind, ListChange};
pub use listeners::{Listener, ListenerId, Listeners};
pub use record_list_model::RecordListModel;
