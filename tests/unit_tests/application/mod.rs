mod analysis_service_test;
mod mocks;
mod structured_output_test;
