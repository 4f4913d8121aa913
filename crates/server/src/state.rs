use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::bakery::repo::seaorm::SeaOrmBakeryRepository;
use service::client::repo::seaorm::SeaOrmClientRepository;
use service::directory::DirectoryPort;
use service::product::repo::seaorm::SeaOrmProductRepository;
use service::{BakeryService, ClientService, ProductService};

pub type Clients = ClientService<SeaOrmClientRepository, SeaOrmBakeryRepository, dyn DirectoryPort>;
pub type Products = ProductService<SeaOrmProductRepository, SeaOrmBakeryRepository>;
pub type Bakeries = BakeryService<SeaOrmBakeryRepository>;

#[derive(Clone)]
pub struct ServerState {
    pub clients: Arc<Clients>,
    pub products: Arc<Products>,
    pub bakeries: Arc<Bakeries>,
}

impl ServerState {
    /// Wire the SeaORM gateways and the given directory into the services.
    pub fn new(db: DatabaseConnection, directory: Arc<dyn DirectoryPort>) -> Self {
        let bakery_repo = Arc::new(SeaOrmBakeryRepository { db: db.clone() });
        let client_repo = Arc::new(SeaOrmClientRepository { db: db.clone() });
        let product_repo = Arc::new(SeaOrmProductRepository { db });
        Self {
            clients: Arc::new(ClientService::new(client_repo, bakery_repo.clone(), directory)),
            products: Arc::new(ProductService::new(product_repo, bakery_repo.clone())),
            bakeries: Arc::new(BakeryService::new(bakery_repo)),
        }
    }
}
