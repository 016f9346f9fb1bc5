use actix_web::web;

pub mod actions;
pub mod validation;
pub mod views;

pub mod routes {
    pub mod invoice;
    pub mod view;
}

pub mod dtos {
    pub mod view;
}

#[cfg(test)]
mod testing;

pub fn mount_invoices() -> actix_web::Scope {
    web::scope("/invoices")
        .service(routes::invoice::post_create_invoice)
        .service(routes::invoice::post_update_invoice)
        .service(routes::invoice::post_delete_invoice)
}

pub fn mount_views() -> actix_web::Scope {
    web::scope("/views").service(routes::view::get_revision)
}
