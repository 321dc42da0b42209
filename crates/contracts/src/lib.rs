//! Общие типы каталога: DTO товара, состояние фильтра и построение запроса.

pub mod domain;
pub mod shared;
