pub(super) const MESSAGES: &[(&str, &str)] = &[
    // validation rules
    ("validation.required", "The :attribute field is required."),
    ("validation.string", "The :attribute field must be a string."),
    ("validation.numeric", "The :attribute field must be a number."),
    ("validation.date", "The :attribute field must be a valid date."),
    ("validation.email", "The :attribute field must be a valid email address."),
    ("validation.min.string", "The :attribute field must be at least :min characters."),
    ("validation.min.numeric", "The :attribute field must be at least :min."),
    ("validation.min.array", "The :attribute field must have at least :min items."),
    ("validation.max.string", "The :attribute field must not be greater than :max characters."),
    ("validation.max.numeric", "The :attribute field must not be greater than :max."),
    ("validation.max.array", "The :attribute field must not have more than :max items."),
    ("validation.decimal", "The :attribute field must have at most :decimal decimal places."),
    ("validation.enum", "The selected :attribute is invalid. Allowed values: :values."),
    ("validation.failed", "The given data was invalid."),
    // attribute labels
    ("validation.attributes.customer_name", "customer_name"),
    ("validation.attributes.phone", "phone"),
    ("validation.attributes.email", "email"),
    ("validation.attributes.article_name", "article_name"),
    ("validation.attributes.article_type", "article_type"),
    ("validation.attributes.article_brand", "article_brand"),
    ("validation.attributes.article_model", "article_model"),
    ("validation.attributes.serialnumber", "serialnumber"),
    ("validation.attributes.accesories", "accesories"),
    ("validation.attributes.article_problem", "article_problem"),
    ("validation.attributes.repair_status", "repair_status"),
    ("validation.attributes.repair_details", "repair_details"),
    ("validation.attributes.repair_price", "repair_price"),
    ("validation.attributes.received_at", "received_at"),
    ("validation.attributes.repaired_at", "repaired_at"),
    ("validation.attributes.name", "name"),
    ("validation.attributes.description", "description"),
    ("validation.attributes.date", "date"),
    ("validation.attributes.location", "location"),
    ("validation.attributes.detail", "detail"),
    // resource messages
    ("messages.repair_request.retrieved_list", "Repair requests retrieved successfully."),
    ("messages.repair_request.created", "Repair request created successfully."),
    ("messages.repair_request.retrieved", "Repair request retrieved successfully."),
    ("messages.repair_request.updated", "Repair request updated successfully."),
    ("messages.repair_request.deleted", "Repair request deleted successfully."),
    ("messages.repair_request.not_found", "Repair request not found."),
    ("messages.category.retrieved_list", "Categories retrieved successfully."),
    ("messages.category.created", "Category created successfully."),
    ("messages.category.retrieved", "Category retrieved successfully."),
    ("messages.category.updated", "Category updated successfully."),
    ("messages.category.deleted", "Category deleted successfully."),
    ("messages.category.not_found", "Category not found."),
    ("messages.support_request.retrieved_list", "Support requests retrieved successfully."),
    ("messages.support_request.created", "Support request created successfully."),
    ("messages.support_request.retrieved", "Support request retrieved successfully."),
    ("messages.support_request.updated", "Support request updated successfully."),
    ("messages.support_request.deleted", "Support request deleted successfully."),
    ("messages.support_request.not_found", "Support request not found."),
    ("messages.user.not_found", "User not found."),
    ("messages.health.ok", "Service is healthy."),
    ("messages.health.degraded", "Service is degraded."),
    // auth and generic failures
    ("auth.unauthenticated", "Unauthenticated."),
    ("auth.role_denied", "User does not have the right roles."),
    ("errors.bad_request", "The request body could not be parsed."),
    ("errors.internal", "An internal error occurred."),
];
