//! # マッパー
//!
//! 保存済みエンティティをレスポンス DTO に変換する純粋関数群。
//!
//! ## 設計方針
//!
//! - 副作用なし・失敗なし。宣言されたフィールドの単純な写しのみを行う
//! - エンティティごとに単数形と、要素ごとに適用する複数形を提供する
//!   （空の入力は空の出力になる。エラーにはならない）

use storefront_domain::{Category, Customer, Employee, Product};

use crate::dto::{CategoryResponse, CustomerResponse, EmployeeResponse, ProductResponse};

/// カテゴリをレスポンスに変換する
pub fn to_category_response(category: Category) -> CategoryResponse {
    CategoryResponse {
        id:   category.id,
        name: category.name,
    }
}

/// カテゴリ列をレスポンス列に変換する
pub fn to_category_responses(categories: Vec<Category>) -> Vec<CategoryResponse> {
    categories.into_iter().map(to_category_response).collect()
}

/// 顧客をレスポンスに変換する
pub fn to_customer_response(customer: Customer) -> CustomerResponse {
    CustomerResponse {
        customer_id:    customer.id,
        name:           customer.name,
        email:          customer.email,
        phone:          customer.phone,
        address:        customer.address,
        loyalty_points: customer.loyalty_pts,
    }
}

/// 顧客列をレスポンス列に変換する
pub fn to_customer_responses(customers: Vec<Customer>) -> Vec<CustomerResponse> {
    customers.into_iter().map(to_customer_response).collect()
}

/// 従業員をレスポンスに変換する
pub fn to_employee_response(employee: Employee) -> EmployeeResponse {
    EmployeeResponse {
        employee_id: employee.id,
        name:        employee.name,
        role:        employee.role,
        email:       employee.email,
        phone:       employee.phone,
        date_hired:  employee.date_hired,
    }
}

/// 従業員列をレスポンス列に変換する
pub fn to_employee_responses(employees: Vec<Employee>) -> Vec<EmployeeResponse> {
    employees.into_iter().map(to_employee_response).collect()
}

/// 商品をレスポンスに変換する
pub fn to_product_response(product: Product) -> ProductResponse {
    ProductResponse {
        product_id:  product.id,
        name:        product.name,
        description: product.description,
        price:       product.price,
        stock_qty:   product.stock_qty,
        category:    product.category,
        sku:         product.sku,
        tax_rate:    product.tax_rate,
    }
}

/// 商品列をレスポンス列に変換する
pub fn to_product_responses(products: Vec<Product>) -> Vec<ProductResponse> {
    products.into_iter().map(to_product_response).collect()
}
