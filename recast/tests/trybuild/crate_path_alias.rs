//! Trybuild fixture verifying `#[recast(crate = "...")]` works with a
//! dependency rename via `use ... as`.

use recast as my_recast;
use my_recast::{Record, TransformExt};

/// Generated code must reference types through `my_recast` rather than
/// `recast`.
#[derive(Clone, Default, Record)]
#[recast(crate = "my_recast", transformable)]
struct AliasedRow {
    value: String,
    count: u32,
}

#[derive(Clone, Default, Record)]
#[recast(crate = "my_recast")]
struct AliasedDto {
    count: u32,
}

fn main() {
    let row = AliasedRow {
        value: "hello".to_owned(),
        count: 1,
    };
    let _: my_recast::TransformResult<AliasedDto> = row.transform_into();
}
