//! Static fragment bodies used across harnesses.

/// Inner hit bodies as a user would type them after `--inner-hit`.
pub const INNER_HIT_SPECS: &[&str] = &[
    "name=last_tweets,size=5,sort=date:asc",
    "name=most_liked,size=3,sort=likes:desc,sort=date:desc",
    "name=first,from=0,size=1,explain=true",
    "name=no_source,source=false",
];

/// Raw JSON inner hit bodies, valid.
pub const RAW_INNER_HITS: &[&str] = &[
    r#"{"name":"last_tweets","size":5,"sort":[{"date":"asc"}]}"#,
    r#"{"name":"by_score","sort":[{"_score":{"order":"desc"}}]}"#,
    r#"{}"#,
];

/// Raw JSON inner hit bodies that do not parse.
pub const MALFORMED_INNER_HITS: &[&str] = &[r#"{"name":"#, "{name: x}", "{]"];
