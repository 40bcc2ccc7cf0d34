mod auth_flow_tests;
mod page_tests;
