//! Attachment picker with drag-and-drop for chat mode.
//!
//! Browser `FileList`s are reduced to `(name, size, mime)` triples and
//! validated by `state::upload`; nothing is read or transmitted.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::state::upload::partition_uploads;
use crate::state::upload::{FileInfo, SUPPORTED_EXTENSIONS, UploadBatch, format_file_size};
#[cfg(feature = "hydrate")]
use crate::util::clock::now_ms;

#[component]
pub fn FileUpload(
    #[prop(into)] files: Signal<Vec<FileInfo>>,
    #[prop(into)] errors: Signal<Vec<String>>,
    on_files: Callback<UploadBatch>,
    on_remove: Callback<String>,
) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let dragging = RwSignal::new(false);
    let accept = SUPPORTED_EXTENSIONS.join(",");
    #[cfg(not(feature = "hydrate"))]
    let _ = on_files;

    let open_picker = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(input) = input_ref.get_untracked() {
                input.click();
            }
        }
    };

    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;
            let input = ev.target().and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok());
            if let Some(input) = input {
                on_files.run(partition_uploads(collect_files(input.files()), now_ms()));
                // Allow re-selecting the same file.
                input.set_value("");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        dragging.set(false);
        #[cfg(feature = "hydrate")]
        {
            let list = ev.data_transfer().and_then(|transfer| transfer.files());
            on_files.run(partition_uploads(collect_files(list), now_ms()));
        }
    };

    view! {
        <div class="file-upload">
            <div
                class="file-upload__dropzone"
                class:file-upload__dropzone--active=move || dragging.get()
                on:click=open_picker
                on:dragover=move |ev: leptos::ev::DragEvent| {
                    ev.prevent_default();
                    dragging.set(true);
                }
                on:dragleave=move |_| dragging.set(false)
                on:drop=on_drop
            >
                <i class="ri-upload-2-line"></i>
                <span>"点击上传"</span>
                <span class="file-upload__muted">" 或拖拽文件"</span>
                <p class="file-upload__formats">"支持 CSV, Excel, JSON"</p>
            </div>
            <input
                node_ref=input_ref
                type="file"
                multiple=true
                accept=accept
                class="file-upload__input"
                on:change=on_change
            />

            <Show when=move || !errors.with(Vec::is_empty)>
                <ul class="file-upload__errors" role="alert">
                    {move || {
                        errors
                            .get()
                            .into_iter()
                            .map(|message| view! { <li>{message}</li> })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </Show>

            <Show when=move || !files.with(Vec::is_empty)>
                <div class="file-upload__list">
                    <p class="file-upload__count">{move || format!("已选择 {} 个文件:", files.with(Vec::len))}</p>
                    {move || {
                        files
                            .get()
                            .into_iter()
                            .map(|file| {
                                let id = file.id.clone();
                                view! {
                                    <div class="file-upload__item">
                                        <i class="ri-file-text-line"></i>
                                        <div class="file-upload__meta">
                                            <p class="file-upload__name">{file.name}</p>
                                            <p class="file-upload__size">{format_file_size(file.size)}</p>
                                        </div>
                                        <button
                                            class="file-upload__remove"
                                            on:click=move |_| on_remove.run(id.clone())
                                        >
                                            <i class="ri-close-line"></i>
                                        </button>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn collect_files(list: Option<web_sys::FileList>) -> Vec<(String, u64, String)> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|index| list.get(index))
        .map(|file| {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let size = file.size() as u64;
            (file.name(), size, file.type_())
        })
        .collect()
}
