//! This module provides a [mockall::mock] concrete struct [MockPlatform]
//! which can be used for testing lifecycle services and host engines
use crate::domain::ports::FunctionPlatform;
use mockall::mock;
use models_function::{FunctionConfig, RemoteFunction};

const _NOT_PROD: () = const {
    assert!(
        cfg!(debug_assertions),
        "You are trying to include mock code in a production build please run `cargo tree -i function_resource -e features -p <FAILING_PACKAGE>` to see how the mock feature is being included in [dependencies]"
    );
};

mock! {
    pub Platform {}
    impl FunctionPlatform for Platform {
        type Err = anyhow::Error;

        fn create_function<'a>(
            &self,
            config: &'a FunctionConfig,
            archive: Vec<u8>,
        ) -> impl Future<Output = Result<(), anyhow::Error>> + Send;

        fn get_function<'a>(
            &self,
            function_name: &'a str,
        ) -> impl Future<Output = Result<Option<RemoteFunction>, anyhow::Error>> + Send;

        fn update_function_configuration<'a>(
            &self,
            config: &'a FunctionConfig,
        ) -> impl Future<Output = Result<(), anyhow::Error>> + Send;

        fn update_function_code<'a>(
            &self,
            function_name: &'a str,
            archive: Vec<u8>,
        ) -> impl Future<Output = Result<(), anyhow::Error>> + Send;

        fn delete_function<'a>(
            &self,
            function_name: &'a str,
        ) -> impl Future<Output = Result<(), anyhow::Error>> + Send;
    }
}
