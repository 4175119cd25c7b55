use chardetng::EncodingDetector;
use encoding_rs::Encoding;

/// Bytes decoded to UTF-8 text, with the name of the encoding that applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedPage {
    pub text: String,
    pub encoding: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("response body is not valid {encoding}")]
    Undecodable { encoding: String },
}

/// Decode fetched bytes into UTF-8 text.
///
/// Encoding choice order: byte-order mark, then the `charset` parameter of
/// the `Content-Type` header, then statistical detection over the full body.
pub fn decode_page(bytes: &[u8], content_type: Option<&str>) -> Result<DecodedPage, DecodeError> {
    let encoding = Encoding::for_bom(bytes)
        .map(|(encoding, _)| encoding)
        .or_else(|| header_encoding(content_type))
        .unwrap_or_else(|| detect_encoding(bytes));

    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        return Err(DecodeError::Undecodable {
            encoding: encoding.name().to_string(),
        });
    }
    Ok(DecodedPage {
        text: text.into_owned(),
        encoding: encoding.name().to_string(),
    })
}

fn header_encoding(content_type: Option<&str>) -> Option<&'static Encoding> {
    let label = content_type?.split(';').map(str::trim).find_map(|param| {
        let (key, value) = param.split_once('=')?;
        key.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches(['"', '\'']))
    })?;
    Encoding::for_label(label.as_bytes())
}

fn detect_encoding(bytes: &[u8]) -> &'static Encoding {
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    detector.guess(None, true)
}
