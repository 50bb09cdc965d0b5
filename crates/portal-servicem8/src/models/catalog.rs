use super::record;

record! {
    Staff { first, last, email, mobile, job_title }
}

record! {
    /// Stock item (`/material.json`).
    Material { name, item_number, price, cost, item_description }
}

record! {
    Category { name, colour }
}

record! {
    /// A saved address (`/location.json`), not a job position.
    Location { name, line1, line2, city, state, post_code, country }
}

record! {
    Badge { name, file_name }
}

record! {
    TaxRate { name, rate }
}
