//! Scribe engine: puzzle-page fetch, article isolation, and MDX rendering.
mod article;
mod convert;
mod decode;
mod fetch;
mod persist;

pub use article::{extract_article_html, find_article, locate_article};
pub use convert::{ConvertError, Converter, MdxConverter};
pub use decode::{decode_page, DecodeError, DecodedPage};
pub use fetch::{
    puzzle_url, BlockingFetcher, FailureKind, FetchError, FetchOutput, FetchSettings, Fetcher,
    ReqwestFetcher,
};
pub use persist::{write_atomic, PersistError};
