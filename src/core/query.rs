//! Query-string encoding shared by every resource.
//!
//! Query types are plain serde structs of optional fields. Encoding goes through a
//! `serde_json::Value` object so that each struct only has to describe its keys once.

use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::core::OandaError;

/// Serialize `query` into `(key, value)` pairs, skipping nulls.
///
/// Keys come out sorted, strings are passed through verbatim and other scalars use
/// their JSON text form.
pub(crate) fn query_pairs<Q: Serialize + ?Sized>(
    query: &Q,
) -> Result<Vec<(String, String)>, OandaError> {
    let map = match serde_json::to_value(query)? {
        Value::Object(map) => map,
        Value::Null => return Ok(Vec::new()),
        other => {
            return Err(OandaError::Data(format!(
                "query must serialize to an object, got {other}"
            )));
        }
    };

    let mut out = Vec::with_capacity(map.len());
    for (k, v) in map {
        let v = match v {
            Value::Null => continue,
            Value::String(s) => s,
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            other @ (Value::Array(_) | Value::Object(_)) => {
                return Err(OandaError::Data(format!(
                    "query field '{k}' must be a scalar, got {other}"
                )));
            }
        };
        out.push((k, v));
    }
    out.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(out)
}

/// Append every set field of `query` to the URL's query string.
pub(crate) fn append_query<Q: Serialize + ?Sized>(
    url: &mut Url,
    query: &Q,
) -> Result<(), OandaError> {
    let pairs = query_pairs(query)?;
    if pairs.is_empty() {
        return Ok(());
    }
    let mut qp = url.query_pairs_mut();
    for (k, v) in &pairs {
        qp.append_pair(k, v);
    }
    Ok(())
}

/// Encode `query` as a bare query string (`a=1&b=2`), mostly useful for inspection.
pub fn encode<Q: Serialize + ?Sized>(query: &Q) -> Result<String, OandaError> {
    let pairs = query_pairs(query)?;
    let mut ser = url::form_urlencoded::Serializer::new(String::new());
    for (k, v) in &pairs {
        ser.append_pair(k, v);
    }
    Ok(ser.finish())
}

/// Comma-join a list for the csv-valued upstream parameters; `None` for an empty list.
pub(crate) fn csv<I, S>(items: I) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(item.as_ref());
    }
    (!out.is_empty()).then_some(out)
}

/// Clear both ends of a `from`/`to` range that is reversed or ends in the future.
///
/// Both ends are in the [`rfc3339`] form, which sorts chronologically as text.
pub(crate) fn check_range(from: &mut Option<String>, to: &mut Option<String>) {
    let now = rfc3339(chrono::Utc::now());
    let ends_late = to.as_deref().is_some_and(|t| t > now.as_str());
    let reversed = matches!((from.as_deref(), to.as_deref()), (Some(f), Some(t)) if f >= t);
    if ends_late || reversed {
        *from = None;
        *to = None;
    }
}

/// RFC 3339 with second precision and a `Z` suffix, the form the API expects for `DateTime`
/// parameters.
pub(crate) fn rfc3339(t: chrono::DateTime<chrono::Utc>) -> String {
    t.to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
}
