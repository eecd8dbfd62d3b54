//! UI Components

mod auth_menu;
mod dark_mode_toggle;
mod draggable_item;
mod list_column;
mod new_list_form;

pub use auth_menu::AuthMenu;
pub use dark_mode_toggle::DarkModeToggle;
pub use draggable_item::DraggableItem;
pub use list_column::ListColumn;
pub use new_list_form::NewListForm;
