pub mod safe_area_editor;
