use niche_portal_shared::Employee;
use niche_portal_shared::protocol::Endpoint;
use serde::de::IgnoredAny;

use crate::api::ApiClient;
use crate::error::ApiResult;
use crate::request::HttpClient;

pub struct EmployeeApi<'a, C> {
    client: &'a ApiClient<C>,
}

impl<'a, C: HttpClient> EmployeeApi<'a, C> {
    pub fn new(client: &'a ApiClient<C>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> ApiResult<Vec<Employee>> {
        self.client.request(Endpoint::EmployeesList, &[]).await
    }

    pub async fn get(&self, employee_id: &str) -> ApiResult<Employee> {
        self.client
            .request(Endpoint::EmployeeGet, &[employee_id])
            .await
    }

    pub async fn create(&self, employee: &Employee) -> ApiResult<Employee> {
        self.client
            .request_with(Endpoint::EmployeeCreate, &[], employee)
            .await
    }

    pub async fn update(&self, employee_id: &str, employee: &Employee) -> ApiResult<()> {
        self.client
            .request_with::<_, IgnoredAny>(Endpoint::EmployeeUpdate, &[employee_id], employee)
            .await
            .map(|_| ())
    }

    pub async fn delete(&self, employee_id: &str) -> ApiResult<()> {
        self.client
            .request::<IgnoredAny>(Endpoint::EmployeeDelete, &[employee_id])
            .await
            .map(|_| ())
    }
}
