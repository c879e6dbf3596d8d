use dioxus::prelude::*;
use dioxus_logger::tracing::{info, warn};

use crate::{
    route::Route,
    storage::{use_upload_flag, UploadFlag},
};

#[derive(Clone, PartialEq)]
struct UploadedFile {
    name: String,
    size: usize,
}

/// Records a finished upload and returns where to go next.
pub(crate) fn complete_upload(flag: &dyn UploadFlag) -> anyhow::Result<Route> {
    flag.mark_uploaded()?;

    Ok(Route::Overview {})
}

pub fn Upload() -> Element {
    let mut files_signal = use_signal::<Vec<UploadedFile>>(|| Vec::new());
    let mut error_signal = use_signal::<Option<String>>(|| None);
    let mut reading_signal = use_signal(|| false);
    let navigator = use_navigator();
    let upload_flag = use_upload_flag();

    let already_uploaded = upload_flag.is_set();

    let files = files_signal();
    let error = error_signal();
    let reading = reading_signal();

    rsx! {
        div {
            class: "flex w-screen",
            div {
                class: "min-w-sm p-6 border rounded-lg shadow-sm bg-gray-800 border-gray-700 flex-col mx-auto mt-2",
                h5 {
                    class: "mb-2 text-2xl font-bold tracking-tight text-white",
                    "Upload data"
                }
                label {
                    r#for: "data_file",
                    class: "block mb-2 text-sm font-medium text-white",
                    "Choose a file to analyse"
                }
                input {
                    r#type: "file",
                    id: "data_file",
                    accept: ".csv,.tsv,.xls,.xlsx,.json",
                    multiple: true,
                    disabled: reading,
                    class: "block w-full text-sm border rounded-lg cursor-pointer text-gray-400 bg-gray-700 border-gray-600",
                    onchange: move |evt: FormEvent| {
                        let upload_flag = upload_flag.clone();
                        async move {
                            let Some(file_engine) = evt.files() else {
                                return;
                            };

                            let names = file_engine.files();
                            if names.is_empty() {
                                return;
                            }

                            reading_signal.set(true);
                            error_signal.set(None);

                            let mut read = Vec::with_capacity(names.len());
                            for name in names {
                                match file_engine.read_file(&name).await {
                                    Some(contents) => read.push(UploadedFile {
                                        size: contents.len(),
                                        name,
                                    }),
                                    None => {
                                        warn!("could not read {}", name);
                                        error_signal.set(Some(format!("Could not read {}", name)));
                                        reading_signal.set(false);
                                        return;
                                    }
                                }
                            }

                            info!("read {} file(s)", read.len());
                            files_signal.set(read);
                            reading_signal.set(false);

                            match complete_upload(&*upload_flag) {
                                Ok(next) => {
                                    navigator.push(next);
                                }
                                Err(e) => {
                                    warn!("{}", e);
                                    error_signal.set(Some(e.to_string()));
                                }
                            }
                        }
                    }
                }
                if reading {
                    p {
                        class: "mt-2 text-sm text-gray-400",
                        "Reading..."
                    }
                }
                if let Some(error) = error {
                    p {
                        class: "mt-2 text-sm text-red-500",
                        "{error}"
                    }
                }
                ul {
                    class: "mt-4 space-y-1 text-sm text-white",
                    for file in files {
                        li {
                            "{file.name} ({file.size} bytes)"
                        }
                    }
                }
                if already_uploaded {
                    Link {
                        class: "block mt-4 text-white text-sm underline",
                        to: Route::Overview {},
                        "Continue to the dashboard"
                    }
                }
            }
        }
    }
}
