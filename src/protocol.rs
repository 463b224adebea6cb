use serde::Serialize;

#[derive(Debug, Default, Serialize)]
pub struct SimpleResponse {
    pub success: bool,
    pub err: String,
}

impl SimpleResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            err: "".to_string(),
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct CountResponse {
    pub success: bool,
    pub err: String,
    pub count: usize,
}

impl CountResponse {
    pub fn ok(count: usize) -> Self {
        Self {
            success: true,
            err: "".to_string(),
            count,
        }
    }
}

#[macro_export]
macro_rules! impl_err_response {
    ( $( $type:ty),+ $(,)? ) => {
        $(
            impl $type {
                pub fn err<S: ToString>(err: S) -> Self {
                    Self {
                        success: false,
                        err: err.to_string(),
                        ..Default::default()
                    }
                }
            }
        )+
    };
}

impl_err_response! {
    SimpleResponse,
    CountResponse,
}
