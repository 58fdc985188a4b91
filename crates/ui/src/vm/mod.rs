mod dictionary_vm;

pub use dictionary_vm::{
    DictionaryQuery, PAGE_SIZE, PageView, SEARCH_LIMIT, StatusFilter, visible_page,
};
