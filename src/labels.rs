//! UI Labels
//!
//! Literal strings shown by the widget.

pub const TITLE: &str = "Список желаний";
pub const INPUT_PLACEHOLDER: &str = "Введите желание";
pub const SUBMIT: &str = "+ Добавить";
pub const EMPTY_STATE: &str = "Пока желаний нет...";
pub const DELETE: &str = "Удалить";
pub const CLEAR_ALL: &str = "Очистить всё";
