use hyper::http::{Error, Uri};

pub fn compose_uri(base_uri: &Uri, path: &str) -> Result<Uri, Error> {
    let new_path = [base_uri.path().trim_end_matches('/'), path].concat();
    let mut builder = Uri::builder();
    if let Some(scheme) = base_uri.scheme() {
        builder = builder.scheme(scheme.clone());
    }
    if let Some(authority) = base_uri.authority() {
        builder = builder.authority(authority.clone());
    }
    builder.path_and_query(new_path).build()
}
