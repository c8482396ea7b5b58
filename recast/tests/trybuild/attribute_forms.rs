//! Trybuild fixture exercising every accepted `#[recast(...)]` form.

use recast::{BoxError, Record, TransformExt};

#[derive(Clone, Default, Record)]
#[recast(transformable)]
struct Tenant {
    id: u64,
    code: String,
}

#[derive(Clone, Default, Record)]
#[recast(transformable = true)]
struct Source {
    r#type: String,
    #[recast(composed)]
    primary: Tenant,
    #[recast(composed = true, identity = "code")]
    secondary: Option<Tenant>,
    #[recast(identity)]
    owner: Tenant,
    #[recast(skip)]
    scratch: Vec<std::cell::Cell<u8>>,
    tags: Vec<String>,
}

#[derive(Clone, Record)]
#[recast(transformable = false, constructor = "Target::blank")]
struct Target {
    r#type: String,
    owner: u64,
}

impl Target {
    fn blank() -> Result<Self, BoxError> {
        Ok(Self {
            r#type: String::new(),
            owner: 0,
        })
    }
}

#[derive(Clone, Default, Record)]
struct Empty {}

fn main() {
    let source = Source::default();
    let _ = source.scratch.len();
    let _: Result<Target, _> = source.transform_into();
    let _: Result<Empty, _> = source.transform_into();
}
