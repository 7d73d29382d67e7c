//! Auto-pagination over list endpoints.

use std::collections::VecDeque;
use std::marker::PhantomData;

use futures::stream::{self, Stream, TryStreamExt};
use serde::de::DeserializeOwned;

use asaas_core::{Params, Record, Result};

use crate::transport::HttpTransport;

/// Page size used by [`Paginator`] unless overridden.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Lazy, restartable iteration over every record of a list endpoint.
///
/// Nothing is fetched until [`Paginator::stream`] is polled. Each call to
/// `stream` starts again from offset 0, and stops once the API reports no
/// further pages, a page comes back empty, or `max_items` records were
/// yielded.
///
/// ```no_run
/// use futures::TryStreamExt;
/// use asaas::Asaas;
///
/// # async fn example() -> Result<(), asaas::AsaasError> {
/// let client = Asaas::sandbox("api-key")?;
/// let customers = client.customers();
/// let paginator = customers.list_all(&Default::default()).max_items(250);
///
/// let mut stream = std::pin::pin!(paginator.stream());
/// while let Some(customer) = stream.try_next().await? {
///     println!("{}", customer["id"]);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Paginator<'a, T = Record> {
    http: &'a HttpTransport,
    path: String,
    params: Params,
    page_size: u32,
    max_items: Option<usize>,
    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for Paginator<'_, T> {
    fn clone(&self) -> Self {
        Self {
            http: self.http,
            path: self.path.clone(),
            params: self.params.clone(),
            page_size: self.page_size,
            max_items: self.max_items,
            _record: PhantomData,
        }
    }
}

struct Cursor<'a, T> {
    http: &'a HttpTransport,
    path: String,
    params: Params,
    page_size: u32,
    max_items: Option<usize>,
    offset: u64,
    yielded: usize,
    buffer: VecDeque<T>,
    last_page: bool,
    failed: bool,
}

impl<'a, T: DeserializeOwned + 'a> Paginator<'a, T> {
    pub(crate) fn new(http: &'a HttpTransport, path: impl Into<String>, mut params: Params) -> Self {
        params.remove("offset");
        params.remove("limit");
        Self {
            http,
            path: path.into(),
            params,
            page_size: DEFAULT_PAGE_SIZE,
            max_items: None,
            _record: PhantomData,
        }
    }

    /// Records requested per page (minimum 1).
    #[must_use]
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Stop after yielding `max_items` records.
    #[must_use]
    pub fn max_items(mut self, max_items: usize) -> Self {
        self.max_items = Some(max_items);
        self
    }

    /// Decode records as `U` instead of `T`.
    #[must_use]
    pub fn into_typed<U: DeserializeOwned>(self) -> Paginator<'a, U> {
        Paginator {
            http: self.http,
            path: self.path,
            params: self.params,
            page_size: self.page_size,
            max_items: self.max_items,
            _record: PhantomData,
        }
    }

    /// Filters sent with every page request.
    #[must_use]
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Stream every record, fetching pages on demand.
    ///
    /// The first error ends the stream after it is yielded.
    pub fn stream(&self) -> impl Stream<Item = Result<T>> + 'a {
        let cursor = Cursor {
            http: self.http,
            path: self.path.clone(),
            params: self.params.clone(),
            page_size: self.page_size,
            max_items: self.max_items,
            offset: 0,
            yielded: 0,
            buffer: VecDeque::new(),
            last_page: false,
            failed: false,
        };

        stream::unfold(cursor, |mut cursor| async move {
            loop {
                if cursor.failed || cursor.max_items.is_some_and(|max| cursor.yielded >= max) {
                    return None;
                }
                if let Some(item) = cursor.buffer.pop_front() {
                    cursor.yielded += 1;
                    return Some((Ok(item), cursor));
                }
                if cursor.last_page {
                    return None;
                }

                let params = cursor.params.clone().page(cursor.offset, cursor.page_size);
                match cursor.http.list::<T>(&cursor.path, &params).await {
                    Ok(page) => {
                        tracing::debug!(
                            path = %cursor.path,
                            offset = cursor.offset,
                            records = page.len(),
                            has_more = page.has_more,
                            "Fetched page"
                        );
                        let advance = if page.limit == 0 {
                            cursor.page_size
                        } else {
                            page.limit
                        };
                        cursor.offset += u64::from(advance);
                        cursor.last_page = !page.has_more || page.is_empty();
                        cursor.buffer.extend(page.data);
                    }
                    Err(error) => {
                        cursor.failed = true;
                        return Some((Err(error), cursor));
                    }
                }
            }
        })
    }

    /// Collect every record into a `Vec`.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while fetching a page.
    pub async fn collect(&self) -> Result<Vec<T>> {
        self.stream().try_collect().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use asaas_core::ClientConfig;

    fn transport() -> HttpTransport {
        HttpTransport::new(ClientConfig::new("key").with_base_url("http://127.0.0.1:9")).unwrap()
    }

    #[test]
    fn page_window_is_stripped_from_filters() {
        let http = transport();
        let paginator: Paginator<'_> = Paginator::new(
            &http,
            "/v3/customers",
            Params::new().set("name", "Ana").page(40, 5),
        );

        assert_eq!(paginator.params().get("name"), Some("Ana"));
        assert_eq!(paginator.params().get("offset"), None);
        assert_eq!(paginator.params().get("limit"), None);
    }

    #[test]
    fn page_size_has_floor_of_one() {
        let http = transport();
        let paginator: Paginator<'_> = Paginator::new(&http, "/v3/customers", Params::new()).page_size(0);
        assert_eq!(paginator.page_size, 1);
    }

    #[tokio::test]
    async fn zero_max_items_sends_no_request() {
        // The base URL is unroutable; any request would surface an error.
        let http = transport();
        let paginator: Paginator<'_> = Paginator::new(&http, "/v3/customers", Params::new()).max_items(0);
        assert!(paginator.collect().await.unwrap().is_empty());
    }
}
