#[macro_export]
macro_rules! kwlist {
    () => {
        $crate::KwList::new()
    };
    ($($k:expr => $v:expr),+ $(,)?) => {
        $crate::KwList::from(::std::vec![$((::std::string::String::from($k), $v)),+])
    };
}
