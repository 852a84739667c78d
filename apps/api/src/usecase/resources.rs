//! # リソース定義
//!
//! [`Resource`] トレイトの 4 実装。エンティティ・DTO・マッパーを束ねて
//! [`crate::usecase::CrudUseCase`] をリソースごとに実体化する。
//!
//! 更新の `overwrite` は常に全可変フィールドを写す（全置換）。

use storefront_domain::{Category, Customer, Employee, Product};

use crate::{
    dto::{
        CategoryCreateRequest,
        CategoryResponse,
        CategoryUpdateRequest,
        CustomerCreateRequest,
        CustomerResponse,
        CustomerUpdateRequest,
        EmployeeCreateRequest,
        EmployeeResponse,
        EmployeeUpdateRequest,
        ProductCreateRequest,
        ProductResponse,
        ProductUpdateRequest,
    },
    mapper,
    usecase::crud::Resource,
};

/// カテゴリリソース
pub struct CategoryResource;

impl Resource for CategoryResource {
    type Create = CategoryCreateRequest;
    type Entity = Category;
    type Response = CategoryResponse;
    type Update = CategoryUpdateRequest;

    fn new_entity(request: Self::Create) -> Self::Entity {
        Category {
            id:   String::new(),
            name: request.name,
        }
    }

    fn update_id(request: &Self::Update) -> &str {
        &request.id
    }

    fn assign_update_id(request: &mut Self::Update, id: String) {
        request.id = id;
    }

    fn overwrite(entity: &mut Self::Entity, request: Self::Update) {
        entity.name = request.name;
    }

    fn to_response(entity: Self::Entity) -> Self::Response {
        mapper::to_category_response(entity)
    }

    fn to_responses(entities: Vec<Self::Entity>) -> Vec<Self::Response> {
        mapper::to_category_responses(entities)
    }
}

/// 顧客リソース
pub struct CustomerResource;

impl Resource for CustomerResource {
    type Create = CustomerCreateRequest;
    type Entity = Customer;
    type Response = CustomerResponse;
    type Update = CustomerUpdateRequest;

    fn new_entity(request: Self::Create) -> Self::Entity {
        Customer {
            id:          String::new(),
            name:        request.name,
            email:       request.email,
            phone:       request.phone,
            address:     request.address,
            loyalty_pts: request.loyalty_points,
        }
    }

    fn update_id(request: &Self::Update) -> &str {
        &request.customer_id
    }

    fn assign_update_id(request: &mut Self::Update, id: String) {
        request.customer_id = id;
    }

    fn overwrite(entity: &mut Self::Entity, request: Self::Update) {
        entity.name = request.name;
        entity.email = request.email;
        entity.phone = request.phone;
        entity.address = request.address;
        entity.loyalty_pts = request.loyalty_points;
    }

    fn to_response(entity: Self::Entity) -> Self::Response {
        mapper::to_customer_response(entity)
    }

    fn to_responses(entities: Vec<Self::Entity>) -> Vec<Self::Response> {
        mapper::to_customer_responses(entities)
    }
}

/// 従業員リソース
pub struct EmployeeResource;

impl Resource for EmployeeResource {
    type Create = EmployeeCreateRequest;
    type Entity = Employee;
    type Response = EmployeeResponse;
    type Update = EmployeeUpdateRequest;

    fn new_entity(request: Self::Create) -> Self::Entity {
        Employee {
            id:         String::new(),
            name:       request.name,
            role:       request.role,
            email:      request.email,
            phone:      request.phone,
            date_hired: request.date_hired,
        }
    }

    fn update_id(request: &Self::Update) -> &str {
        &request.employee_id
    }

    fn assign_update_id(request: &mut Self::Update, id: String) {
        request.employee_id = id;
    }

    fn overwrite(entity: &mut Self::Entity, request: Self::Update) {
        entity.name = request.name;
        entity.role = request.role;
        entity.email = request.email;
        entity.phone = request.phone;
        entity.date_hired = request.date_hired;
    }

    fn to_response(entity: Self::Entity) -> Self::Response {
        mapper::to_employee_response(entity)
    }

    fn to_responses(entities: Vec<Self::Entity>) -> Vec<Self::Response> {
        mapper::to_employee_responses(entities)
    }
}

/// 商品リソース
pub struct ProductResource;

impl Resource for ProductResource {
    type Create = ProductCreateRequest;
    type Entity = Product;
    type Response = ProductResponse;
    type Update = ProductUpdateRequest;

    fn new_entity(request: Self::Create) -> Self::Entity {
        Product {
            id:          String::new(),
            name:        request.name,
            description: request.description,
            price:       request.price,
            stock_qty:   request.stock_qty,
            category:    request.category,
            sku:         request.sku,
            tax_rate:    request.tax_rate,
        }
    }

    fn update_id(request: &Self::Update) -> &str {
        &request.product_id
    }

    fn assign_update_id(request: &mut Self::Update, id: String) {
        request.product_id = id;
    }

    fn overwrite(entity: &mut Self::Entity, request: Self::Update) {
        entity.name = request.name;
        entity.description = request.description;
        entity.price = request.price;
        entity.stock_qty = request.stock_qty;
        entity.category = request.category;
        entity.sku = request.sku;
        entity.tax_rate = request.tax_rate;
    }

    fn to_response(entity: Self::Entity) -> Self::Response {
        mapper::to_product_response(entity)
    }

    fn to_responses(entities: Vec<Self::Entity>) -> Vec<Self::Response> {
        mapper::to_product_responses(entities)
    }
}
