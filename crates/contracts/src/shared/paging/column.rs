/// How a cell value is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Text,
    /// Значение ячейки: URL картинки
    Image,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// Описание колонки таблицы: заголовок, сортируемость и функция отображения ячейки.
pub struct Column<T> {
    /// Имя поля, уходит на сервер в параметре сортировки
    pub key: &'static str,
    pub label: &'static str,
    pub sortable: bool,
    pub kind: CellKind,
    pub align: Align,
    pub cell: fn(&T) -> String,
}

impl<T> Column<T> {
    pub fn new(key: &'static str, label: &'static str, cell: fn(&T) -> String) -> Self {
        Self {
            key,
            label,
            sortable: true,
            kind: CellKind::Text,
            align: Align::Left,
            cell,
        }
    }

    pub fn not_sortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    pub fn image(mut self) -> Self {
        self.kind = CellKind::Image;
        self
    }

    pub fn align_right(mut self) -> Self {
        self.align = Align::Right;
        self
    }

    pub fn render(&self, item: &T) -> String {
        (self.cell)(item)
    }
}

// derive(Clone) would require T: Clone
impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Column<T> {}

impl<T> std::fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("sortable", &self.sortable)
            .field("kind", &self.kind)
            .finish()
    }
}

/// Найти колонку по ключу
pub fn find_column<'a, T>(columns: &'a [Column<T>], key: &str) -> Option<&'a Column<T>> {
    columns.iter().find(|c| c.key == key)
}
