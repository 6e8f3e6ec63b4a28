pub(super) const MESSAGES: &[(&str, &str)] = &[
    ("validation.required", "El campo :attribute es obligatorio."),
    ("validation.string", "El campo :attribute debe ser una cadena de caracteres."),
    ("validation.numeric", "El campo :attribute debe ser un número."),
    ("validation.date", "El campo :attribute debe ser una fecha válida."),
    ("validation.email", "El campo :attribute debe ser una dirección de correo válida."),
    ("validation.min.string", "El campo :attribute debe contener al menos :min caracteres."),
    ("validation.min.numeric", "El campo :attribute debe ser al menos :min."),
    ("validation.min.array", "El campo :attribute debe tener al menos :min elementos."),
    ("validation.max.string", "El campo :attribute no debe contener más de :max caracteres."),
    ("validation.max.numeric", "El campo :attribute no debe ser mayor que :max."),
    ("validation.max.array", "El campo :attribute no debe tener más de :max elementos."),
    ("validation.decimal", "El campo :attribute debe tener como máximo :decimal decimales."),
    ("validation.enum", "El :attribute seleccionado no es válido. Valores permitidos: :values."),
    ("validation.failed", "Los datos proporcionados no son válidos."),
    ("validation.attributes.customer_name", "nombre del cliente"),
    ("validation.attributes.phone", "teléfono"),
    ("validation.attributes.email", "correo electrónico"),
    ("validation.attributes.article_name", "nombre del artículo"),
    ("validation.attributes.article_type", "tipo de artículo"),
    ("validation.attributes.article_brand", "marca del artículo"),
    ("validation.attributes.article_model", "modelo del artículo"),
    ("validation.attributes.serialnumber", "número de serie"),
    ("validation.attributes.accesories", "accesorios"),
    ("validation.attributes.article_problem", "problema del artículo"),
    ("validation.attributes.repair_status", "estado de la reparación"),
    ("validation.attributes.repair_details", "detalles de la reparación"),
    ("validation.attributes.repair_price", "precio de la reparación"),
    ("validation.attributes.received_at", "fecha de recepción"),
    ("validation.attributes.repaired_at", "fecha de reparación"),
    ("validation.attributes.name", "nombre"),
    ("validation.attributes.description", "descripción"),
    ("validation.attributes.date", "fecha"),
    ("validation.attributes.location", "ubicación"),
    ("validation.attributes.detail", "detalle"),
    ("messages.repair_request.retrieved_list", "Solicitudes de reparación obtenidas correctamente."),
    ("messages.repair_request.created", "Solicitud de reparación creada correctamente."),
    ("messages.repair_request.retrieved", "Solicitud de reparación obtenida correctamente."),
    ("messages.repair_request.updated", "Solicitud de reparación actualizada correctamente."),
    ("messages.repair_request.deleted", "Solicitud de reparación eliminada correctamente."),
    ("messages.repair_request.not_found", "Solicitud de reparación no encontrada."),
    ("messages.category.retrieved_list", "Categorías obtenidas correctamente."),
    ("messages.category.created", "Categoría creada correctamente."),
    ("messages.category.retrieved", "Categoría obtenida correctamente."),
    ("messages.category.updated", "Categoría actualizada correctamente."),
    ("messages.category.deleted", "Categoría eliminada correctamente."),
    ("messages.category.not_found", "Categoría no encontrada."),
    ("messages.support_request.retrieved_list", "Solicitudes de soporte obtenidas correctamente."),
    ("messages.support_request.created", "Solicitud de soporte creada correctamente."),
    ("messages.support_request.retrieved", "Solicitud de soporte obtenida correctamente."),
    ("messages.support_request.updated", "Solicitud de soporte actualizada correctamente."),
    ("messages.support_request.deleted", "Solicitud de soporte eliminada correctamente."),
    ("messages.support_request.not_found", "Solicitud de soporte no encontrada."),
    ("messages.user.not_found", "Usuario no encontrado."),
    ("messages.health.ok", "El servicio funciona correctamente."),
    ("messages.health.degraded", "El servicio está degradado."),
    ("auth.unauthenticated", "No autenticado."),
    ("auth.role_denied", "El usuario no tiene los roles adecuados."),
    ("errors.bad_request", "No se pudo interpretar el cuerpo de la solicitud."),
    ("errors.internal", "Se produjo un error interno."),
];
