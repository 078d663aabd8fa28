use super::{input_field, layout};

pub fn sign_up_page() -> String {
    let body = format!(
        "<div class=\"container mt-5\"><h1 class=\"mb-4\">Sign Up</h1>\
         <form action=\"/sign_up\" method=\"post\" class=\"needs-validation\">\
         {login}{password}\
         <div class=\"form-check mb-3\">\
         <input type=\"checkbox\" class=\"form-check-input\" name=\"isAdmin\">\
         <label class=\"form-check-label\">Admin</label></div>\
         <button type=\"submit\" class=\"btn btn-primary\">Sign Up</button>\
         </form></div>",
        login = input_field("text", "Login:", "login", "", ""),
        password = input_field("password", "Password:", "password", "", ""),
    );
    layout("Sign Up", &body)
}

pub fn sign_in_page() -> String {
    let body = format!(
        "<div class=\"container mt-5\"><h1 class=\"mb-4\">Sign In</h1>\
         <form action=\"/sign_in\" method=\"post\" class=\"needs-validation\">\
         {login}{password}\
         <button type=\"submit\" class=\"btn btn-primary\">Sign In</button>\
         </form></div>",
        login = input_field("text", "Login:", "login", "", ""),
        password = input_field("password", "Password:", "password", "", ""),
    );
    layout("Sign In", &body)
}
