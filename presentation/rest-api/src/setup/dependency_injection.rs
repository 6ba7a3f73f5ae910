use std::sync::Arc;

use redis::aio::ConnectionManager;

use logger::TracingLogger;
use persistence::basket::repository::BasketRepositoryRedis;
use persistence::catalog::repository::ProductRepositoryMongo;
use persistence::db::CatalogContext;

use business::application::basket::delete::DeleteBasketUseCaseImpl;
use business::application::basket::get::GetBasketUseCaseImpl;
use business::application::basket::update::UpdateBasketUseCaseImpl;
use business::application::catalog::create::CreateProductUseCaseImpl;
use business::application::catalog::delete::DeleteProductUseCaseImpl;
use business::application::catalog::get_all::GetAllProductsUseCaseImpl;
use business::application::catalog::get_by_category::GetProductsByCategoryUseCaseImpl;
use business::application::catalog::get_by_id::GetProductByIdUseCaseImpl;
use business::application::catalog::get_by_name::GetProductsByNameUseCaseImpl;
use business::application::catalog::update::UpdateProductUseCaseImpl;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub basket_api: crate::api::basket::routes::BasketApi,
    pub catalog_api: crate::api::catalog::routes::CatalogApi,
}

impl DependencyContainer {
    pub fn new(cache: ConnectionManager, catalog: CatalogContext) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let basket_repository = Arc::new(BasketRepositoryRedis::new(cache));
        let product_repository = Arc::new(ProductRepositoryMongo::new(catalog.products));

        // Basket use cases
        let get_basket_use_case = Arc::new(GetBasketUseCaseImpl {
            repository: basket_repository.clone(),
            logger: logger.clone(),
        });
        let update_basket_use_case = Arc::new(UpdateBasketUseCaseImpl {
            repository: basket_repository.clone(),
            logger: logger.clone(),
        });
        let delete_basket_use_case = Arc::new(DeleteBasketUseCaseImpl {
            repository: basket_repository,
            logger: logger.clone(),
        });

        // Catalog use cases
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_name_use_case = Arc::new(GetProductsByNameUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_category_use_case = Arc::new(GetProductsByCategoryUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository,
            logger,
        });

        let basket_api = crate::api::basket::routes::BasketApi::new(
            get_basket_use_case,
            update_basket_use_case,
            delete_basket_use_case,
        );

        let catalog_api = crate::api::catalog::routes::CatalogApi::new(
            get_all_use_case,
            get_by_id_use_case,
            get_by_name_use_case,
            get_by_category_use_case,
            create_use_case,
            update_use_case,
            delete_use_case,
        );

        Self {
            health_api,
            basket_api,
            catalog_api,
        }
    }
}
