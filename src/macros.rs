// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! join {
    // String-type concatenation shorthand!
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}

/// Header record from string literals: `header!["Title", "Author"]`.
#[macro_export]
macro_rules! header {
    ($($label:expr),* $(,)?) => {
        $crate::extract::table::Record::new(vec![
            $( $crate::extract::table::Cell::Text(::std::string::String::from($label)) ),*
        ])
    };
}
